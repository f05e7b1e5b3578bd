//! Renderer that emits the page model as JSON, for API clients and for
//! hosts that template the page elsewhere.

use error_pages_sdk::{DisplayBox, ErrorPage, NavigationEntry, PageRenderer, WidgetHandle};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPageRenderer;

impl PageRenderer for JsonPageRenderer {
    fn render(&self, page: &ErrorPage) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&ErrorPageDto::from(page))?)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

#[derive(Debug, Serialize)]
struct ErrorPageDto<'a> {
    status: u16,
    page_title: &'a str,
    #[serde(rename = "box")]
    display_box: DisplayBoxDto<'a>,
    navigation: Vec<NavigationEntryDto<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    news_slider: Option<WidgetDto<'a>>,
}

#[derive(Debug, Serialize)]
struct DisplayBoxDto<'a> {
    title: &'a str,
    text: &'a str,
    image: ImageDto<'a>,
    button: ButtonDto<'a>,
}

#[derive(Debug, Serialize)]
struct ImageDto<'a> {
    src: &'a str,
    float: &'static str,
    hide: bool,
}

#[derive(Debug, Serialize)]
struct ButtonDto<'a> {
    color: &'static str,
    url: &'a str,
    text: &'a str,
    hide: bool,
}

#[derive(Debug, Serialize)]
struct NavigationEntryDto<'a> {
    name: &'a str,
    url: &'a str,
    active: bool,
}

#[derive(Debug, Serialize)]
struct WidgetDto<'a> {
    name: &'a str,
    grid_size: u32,
    markup: &'a str,
}

impl<'a> From<&'a ErrorPage> for ErrorPageDto<'a> {
    fn from(page: &'a ErrorPage) -> Self {
        Self {
            status: page.variant.status_code(),
            page_title: &page.page_title,
            display_box: DisplayBoxDto::from(&page.display_box),
            navigation: page.navigation.iter().map(NavigationEntryDto::from).collect(),
            news_slider: page.news_slider.as_ref().map(WidgetDto::from),
        }
    }
}

impl<'a> From<&'a DisplayBox> for DisplayBoxDto<'a> {
    fn from(b: &'a DisplayBox) -> Self {
        Self {
            title: &b.title,
            text: &b.text,
            image: ImageDto {
                src: &b.image.src,
                float: b.image.float.as_str(),
                hide: b.image.hide,
            },
            button: ButtonDto {
                color: b.button.color.as_str(),
                url: &b.button.url,
                text: &b.button.text,
                hide: b.button.hide,
            },
        }
    }
}

impl<'a> From<&'a NavigationEntry> for NavigationEntryDto<'a> {
    fn from(e: &'a NavigationEntry) -> Self {
        Self {
            name: &e.name,
            url: &e.url,
            active: e.active,
        }
    }
}

impl<'a> From<&'a WidgetHandle> for WidgetDto<'a> {
    fn from(w: &'a WidgetHandle) -> Self {
        Self {
            name: &w.name,
            grid_size: w.grid_size,
            markup: &w.markup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_pages_sdk::{ButtonBox, ButtonColor, ImageBox, ImageFloat, PageVariant};
    use serde_json::Value;

    fn page(news_slider: Option<WidgetHandle>) -> ErrorPage {
        ErrorPage {
            variant: PageVariant::MethodNotAllowed,
            page_title: "Zugriff verweigert!".to_owned(),
            display_box: DisplayBox {
                title: "Oops!".to_owned(),
                text: "text".to_owned(),
                image: ImageBox {
                    src: "https://example.org/img.png".to_owned(),
                    float: ImageFloat::Right,
                    hide: false,
                },
                button: ButtonBox {
                    color: ButtonColor::Green,
                    url: "https://example.org/community".to_owned(),
                    text: "In die Community".to_owned(),
                    hide: true,
                },
            },
            navigation: vec![NavigationEntry {
                name: "Community".to_owned(),
                url: "https://example.org/community".to_owned(),
                active: true,
            }],
            news_slider,
        }
    }

    #[test]
    fn test_renders_model_fields() {
        let body = JsonPageRenderer.render(&page(None)).unwrap();
        let json: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["status"], 405);
        assert_eq!(json["page_title"], "Zugriff verweigert!");
        assert_eq!(json["box"]["image"]["float"], "right");
        assert_eq!(json["box"]["button"]["color"], "green");
        assert_eq!(json["box"]["button"]["hide"], true);
        assert_eq!(json["navigation"][0]["active"], true);
        assert!(json.get("news_slider").is_none());
    }

    #[test]
    fn test_renders_news_slider_when_present() {
        let widget = WidgetHandle {
            name: "news-slider".to_owned(),
            grid_size: 6,
            markup: "<ul></ul>".to_owned(),
        };

        let body = JsonPageRenderer.render(&page(Some(widget))).unwrap();
        let json: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["news_slider"]["grid_size"], 6);
        assert_eq!(JsonPageRenderer.content_type(), "application/json");
    }
}

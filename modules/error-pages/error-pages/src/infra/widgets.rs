use error_pages_sdk::{WidgetFactory, WidgetHandle};

const NEWS_SLIDER: &str = "news-slider";

/// News slider over a fixed set of headlines.
#[derive(Debug, Clone, Default)]
pub struct StaticNewsSliderFactory {
    headlines: Vec<String>,
}

impl StaticNewsSliderFactory {
    #[must_use]
    pub fn new(headlines: Vec<String>) -> Self {
        Self { headlines }
    }
}

impl WidgetFactory for StaticNewsSliderFactory {
    fn create_news_slider(&self, grid_size: u32) -> anyhow::Result<WidgetHandle> {
        let items: String = self
            .headlines
            .iter()
            .map(|h| format!("<li>{h}</li>"))
            .collect();

        Ok(WidgetHandle {
            name: NEWS_SLIDER.to_owned(),
            grid_size,
            markup: format!("<ul class=\"{NEWS_SLIDER} grid-{grid_size}\">{items}</ul>"),
        })
    }
}

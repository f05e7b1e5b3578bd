//! Resolution of partial content overrides against the fixed box defaults.

use error_pages_sdk::{
    ButtonBox, ButtonColor, DisplayBox, DisplayBoxPatch, ImageBox, ImageFloat,
};

pub const DEFAULT_TEXT: &str = "Da ist wohl etwas schiefgelaufen!";
pub const DEFAULT_IMAGE_PATH: &str = "public/images/frank_lost_connection.png";
pub const COMMUNITY_PATH: &str = "community";
pub const DEFAULT_BUTTON_TEXT: &str = "In die Community";

/// Site-specific defaults for every leaf of a [`DisplayBox`] except the
/// title, which defaults to the page title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxDefaults {
    pub text: String,
    pub image: ImageBox,
    pub button: ButtonBox,
}

impl BoxDefaults {
    /// `site_url` is the configured base url including its trailing `/`.
    #[must_use]
    pub fn for_site(site_url: &str) -> Self {
        Self {
            text: DEFAULT_TEXT.to_owned(),
            image: ImageBox {
                src: format!("{site_url}{DEFAULT_IMAGE_PATH}"),
                float: ImageFloat::Right,
                hide: false,
            },
            button: ButtonBox {
                color: ButtonColor::Green,
                url: format!("{site_url}{COMMUNITY_PATH}"),
                text: DEFAULT_BUTTON_TEXT.to_owned(),
                hide: false,
            },
        }
    }
}

/// Merge `patch` over `defaults`, leaf by leaf.
///
/// Each field is taken from the patch when present and from the defaults
/// otherwise; no field's presence influences another.
#[must_use]
pub fn merge(page_title: &str, patch: DisplayBoxPatch, defaults: &BoxDefaults) -> DisplayBox {
    let DisplayBoxPatch {
        title,
        text,
        image,
        button,
    } = patch;

    DisplayBox {
        title: title.unwrap_or_else(|| page_title.to_owned()),
        text: text.unwrap_or_else(|| defaults.text.clone()),
        image: ImageBox {
            src: image.src.unwrap_or_else(|| defaults.image.src.clone()),
            float: image.float.unwrap_or(defaults.image.float),
            hide: image.hide.unwrap_or(defaults.image.hide),
        },
        button: ButtonBox {
            color: button.color.unwrap_or(defaults.button.color),
            url: button.url.unwrap_or_else(|| defaults.button.url.clone()),
            text: button.text.unwrap_or_else(|| defaults.button.text.clone()),
            hide: button.hide.unwrap_or(defaults.button.hide),
        },
    }
}

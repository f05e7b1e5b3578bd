//! Public models for the error-pages module.
//!
//! These are transport-agnostic data structures shared between the module,
//! the incident store that feeds it and the renderer that consumes its output.

/// Classification of a persisted incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncidentKind {
    /// A captured error; its `info` payload is JSON text.
    Error,
    /// Anything else; `info` is free-form text.
    Other,
}

/// A persisted record describing a prior internal failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentRecord {
    pub id: u64,
    pub kind: IncidentKind,
    pub message: String,
    pub file: String,
    pub line: u32,
    /// Site-relative url of the failed request, e.g. `/forum/thread/7`.
    pub url: String,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub info: String,
}

/// Which error page is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageVariant {
    InternalError,
    InternalErrorWithId(u64),
    NotFound,
    MethodNotAllowed,
}

impl PageVariant {
    /// HTTP status the page is served with.
    #[must_use]
    pub fn status_code(self) -> u16 {
        match self {
            Self::InternalError | Self::InternalErrorWithId(_) => 500,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
        }
    }

    /// Only the incident detail page leaves out the news slider.
    #[must_use]
    pub fn shows_news(self) -> bool {
        !matches!(self, Self::InternalErrorWithId(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFloat {
    Left,
    Right,
}

impl ImageFloat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Button colors understood by the error template. `Red` is the alert color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonColor {
    Green,
    Red,
}

impl ButtonColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBox {
    pub src: String,
    pub float: ImageFloat,
    pub hide: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBox {
    pub color: ButtonColor,
    pub url: String,
    pub text: String,
    pub hide: bool,
}

/// Fully resolved content box handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBox {
    pub title: String,
    pub text: String,
    pub image: ImageBox,
    pub button: ButtonBox,
}

/// Partial override of [`ImageBox`]; `None` leaves the default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePatch {
    pub src: Option<String>,
    pub float: Option<ImageFloat>,
    pub hide: Option<bool>,
}

/// Partial override of [`ButtonBox`]; `None` leaves the default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonPatch {
    pub color: Option<ButtonColor>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub hide: Option<bool>,
}

/// Partial override of [`DisplayBox`].
///
/// Presence is tracked per leaf, so an empty `image` patch still yields a
/// fully defaulted image rather than a blank one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBoxPatch {
    pub title: Option<String>,
    pub text: Option<String>,
    pub image: ImagePatch,
    pub button: ButtonPatch,
}

/// One top-level navigation point as seen by a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    pub name: String,
    pub url: String,
    pub active: bool,
}

/// Opaque handle to a widget produced by a [`crate::WidgetFactory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetHandle {
    pub name: String,
    pub grid_size: u32,
    pub markup: String,
}

/// Everything the renderer needs to produce an error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub variant: PageVariant,
    pub page_title: String,
    pub display_box: DisplayBox,
    pub navigation: Vec<NavigationEntry>,
    pub news_slider: Option<WidgetHandle>,
}

//! Error pages SDK
//!
//! Transport-agnostic models and the narrow collaborator interfaces the
//! error-pages module consumes: incident record lookup, navigation, the
//! news slider widget factory and the page renderer.

pub mod api;
pub mod models;

pub use api::{IncidentRecordStore, Navigation, PageRenderer, WidgetFactory};
pub use models::{
    ButtonBox, ButtonColor, ButtonPatch, DisplayBox, DisplayBoxPatch, ErrorPage, ImageBox,
    ImageFloat, ImagePatch, IncidentKind, IncidentRecord, NavigationEntry, PageVariant,
    WidgetHandle,
};

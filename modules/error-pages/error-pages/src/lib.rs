//! Error Pages Module Implementation
//!
//! Resolves failed requests (no route match, disallowed method, internal
//! failure, internal failure with a persisted incident) into error pages.
//! The public models and collaborator traits live in `error-pages-sdk` and
//! are re-exported here.

pub use error_pages_sdk::{
    ButtonColor, DisplayBox, DisplayBoxPatch, ErrorPage, IncidentKind, IncidentRecord,
    IncidentRecordStore, Navigation, PageRenderer, PageVariant, WidgetFactory,
};

pub mod module;
pub use module::{build_service, error_pages_router};

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

pub use config::ErrorPagesConfig;
pub use domain::outcome::{PageHandler, RouteOutcome};
pub use domain::service::{ErrorPageService, PageResponse, RenderedPage, ServiceConfig};

//! Collaborator interfaces consumed by the error-pages module.
//!
//! Each of these is injected into the page service explicitly; the module
//! never looks collaborators up by name at runtime.

use async_trait::async_trait;

use crate::models::{ErrorPage, IncidentRecord, NavigationEntry, WidgetHandle};

/// Read-only lookup of persisted incident records.
///
/// A missing record is an expected outcome and is reported as `Ok(None)`;
/// `Err` is reserved for the store itself being unavailable.
#[async_trait]
pub trait IncidentRecordStore: Send + Sync {
    async fn get_by_id(&self, id: u64) -> anyhow::Result<Option<IncidentRecord>>;
}

/// Site navigation.
///
/// The active point is passed in per call so the highlight belongs to the
/// request that asked for it.
pub trait Navigation: Send + Sync {
    fn entries(&self, active: &str) -> Vec<NavigationEntry>;
}

/// Factory for page widgets.
pub trait WidgetFactory: Send + Sync {
    /// Build a news slider spanning `grid_size` grid columns.
    ///
    /// # Errors
    /// Returns an error if the news source cannot be read.
    fn create_news_slider(&self, grid_size: u32) -> anyhow::Result<WidgetHandle>;
}

/// Turns a finished page model into a response body.
pub trait PageRenderer: Send + Sync {
    /// # Errors
    /// Returns an error if the page cannot be rendered.
    fn render(&self, page: &ErrorPage) -> anyhow::Result<String>;

    /// Content type of the rendered body.
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

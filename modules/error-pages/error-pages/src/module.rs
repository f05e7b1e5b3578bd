//! Wiring of the error pages service with its in-process collaborators.

use std::sync::Arc;

use axum::Router;
use error_pages_sdk::IncidentRecord;
use tracing::info;

use crate::api::rest::{install_fallbacks, register_routes};
use crate::config::ErrorPagesConfig;
use crate::domain::service::ErrorPageService;
use crate::infra::{
    InMemoryIncidentStore, JsonPageRenderer, StaticNavigation, StaticNewsSliderFactory,
};

/// Build the service from configuration, backed by the in-memory store,
/// static navigation, the static news slider and the JSON renderer.
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn build_service(config: &ErrorPagesConfig) -> anyhow::Result<Arc<ErrorPageService>> {
    let service_config = config.service_config()?;

    let store = InMemoryIncidentStore::from_records(
        config.incidents.iter().cloned().map(IncidentRecord::from),
    );
    let navigation = StaticNavigation::new(&service_config.site_url, &config.navigation);
    let widgets = StaticNewsSliderFactory::new(config.news_headlines.clone());

    info!(
        site_url = %service_config.site_url,
        incidents = store.len(),
        "Error pages service initialized"
    );

    Ok(Arc::new(ErrorPageService::new(
        Arc::new(store),
        Arc::new(navigation),
        Arc::new(widgets),
        Arc::new(JsonPageRenderer),
        service_config,
    )))
}

/// Router serving the error page routes and catching every unmatched
/// request on `router`.
#[must_use]
pub fn error_pages_router(router: Router, service: &Arc<ErrorPageService>) -> Router {
    install_fallbacks(register_routes(router, service.clone()), service.clone())
}

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::ErrorPageService;

pub const ROUTE_ERROR: &str = "/error";
pub const ROUTE_INTERNAL_ERROR: &str = "/error/500";
pub const ROUTE_INCIDENT: &str = "/error/id/{id}";

/// The three error page routes.
#[must_use]
pub fn register_routes(router: Router, service: Arc<ErrorPageService>) -> Router {
    router
        .route(ROUTE_ERROR, get(handlers::error_landing))
        .route(ROUTE_INTERNAL_ERROR, get(handlers::internal_error))
        .route(ROUTE_INCIDENT, get(handlers::incident))
        .layer(Extension(service))
}

/// Send the router's unmatched paths and disallowed methods to the error
/// pages. Call after all other routes have been added.
#[must_use]
pub fn install_fallbacks(router: Router, service: Arc<ErrorPageService>) -> Router {
    router
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(Extension(service))
}

use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Redirect, Response};

use crate::api::rest::error::domain_error_to_problem;
use crate::domain::outcome::{PageHandler, RouteOutcome};
use crate::domain::service::{ErrorPageService, PageResponse, RenderedPage};

/// `GET /error`
pub async fn error_landing(
    Extension(svc): Extension<Arc<ErrorPageService>>,
    uri: Uri,
) -> Response {
    respond(&svc, RouteOutcome::matched(PageHandler::Fallback), &uri).await
}

/// `GET /error/500`
pub async fn internal_error(
    Extension(svc): Extension<Arc<ErrorPageService>>,
    uri: Uri,
) -> Response {
    respond(&svc, RouteOutcome::matched(PageHandler::InternalError), &uri).await
}

/// `GET /error/id/{id}`; only digit sequences match, anything else is a
/// router miss.
pub async fn incident(
    Extension(svc): Extension<Arc<ErrorPageService>>,
    Path(id): Path<String>,
    uri: Uri,
) -> Response {
    let outcome = if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        RouteOutcome::incident(id)
    } else {
        RouteOutcome::NotFound
    };
    respond(&svc, outcome, &uri).await
}

/// Router fallback for unmatched paths.
pub async fn not_found(Extension(svc): Extension<Arc<ErrorPageService>>, uri: Uri) -> Response {
    respond(&svc, RouteOutcome::NotFound, &uri).await
}

/// Router fallback for a matched path with an unsupported method.
pub async fn method_not_allowed(
    Extension(svc): Extension<Arc<ErrorPageService>>,
    uri: Uri,
) -> Response {
    respond(&svc, RouteOutcome::MethodNotAllowed, &uri).await
}

async fn respond(svc: &ErrorPageService, outcome: RouteOutcome, uri: &Uri) -> Response {
    match svc.handle(&outcome).await {
        Ok(PageResponse::Render(page)) => page_response(page),
        Ok(PageResponse::Redirect { location }) => Redirect::to(&location).into_response(),
        Err(e) => domain_error_to_problem(&e, uri.path()).into_response(),
    }
}

fn page_response(page: RenderedPage) -> Response {
    let status = StatusCode::from_u16(page.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, page.content_type)], page.body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorPagesConfig;
    use crate::infra::{
        InMemoryIncidentStore, JsonPageRenderer, StaticNavigation, StaticNewsSliderFactory,
    };
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::get;
    use tower::ServiceExt as _;

    fn create_test_service() -> Arc<ErrorPageService> {
        let cfg = ErrorPagesConfig::default();
        let service_cfg = cfg.service_config().unwrap();
        Arc::new(ErrorPageService::new(
            Arc::new(InMemoryIncidentStore::new()),
            Arc::new(StaticNavigation::new(&service_cfg.site_url, &cfg.navigation)),
            Arc::new(StaticNewsSliderFactory::default()),
            Arc::new(JsonPageRenderer),
            service_cfg,
        ))
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/incident/{id}", get(incident))
            .layer(Extension(create_test_service()))
    }

    async fn get_status(app: Router, uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_non_digit_id_is_a_route_miss() {
        assert_eq!(
            get_status(create_test_router(), "/incident/12a").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_unknown_digit_id_redirects() {
        assert_eq!(
            get_status(create_test_router(), "/incident/12").await,
            StatusCode::SEE_OTHER
        );
    }

    #[test]
    fn test_page_response_keeps_status_and_content_type() {
        let resp = page_response(RenderedPage {
            variant: error_pages_sdk::PageVariant::MethodNotAllowed,
            status: 405,
            content_type: "text/html; charset=utf-8",
            body: "<h1>Zugriff verweigert!</h1>".to_owned(),
        });

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the error page routes
//!
//! Drives the full router (routes plus fallbacks) built from configuration,
//! with the in-memory collaborators.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use axum::routing::get;
use error_pages::{ErrorPagesConfig, build_service, error_pages_router};
use serde_json::{Value, json};
use tower::ServiceExt; // for oneshot

fn test_config() -> ErrorPagesConfig {
    serde_json::from_value(json!({
        "site_url": "https://example.org",
        "news_headlines": ["Wartung am Sonntag"],
        "incidents": [
            {
                "id": 1,
                "kind": "error",
                "message": "Undefined variable $user",
                "file": "/srv/app/View/profile.php",
                "line": 17,
                "url": "/profile/9",
                "timestamp": 1_700_000_000,
                "info": "{\"a\":1}"
            },
            {
                "id": 2,
                "kind": "other",
                "message": "Mail queue stalled",
                "url": "/mail",
                "timestamp": 1_700_000_000,
                "info": "{\"a\":1}"
            }
        ]
    }))
    .expect("valid test config")
}

fn app() -> Router {
    let service = build_service(&test_config()).unwrap();
    let host = Router::new().route("/hello", get(|| async { "hello" }));
    error_pages_router(host, &service)
}

async fn send(method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Failed to parse page JSON")
}

#[tokio::test]
async fn test_host_routes_are_untouched() {
    let response = send(Method::GET, "/hello").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_renders_not_found_page() {
    let response = send(Method::GET, "/does/not/exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let page = json_body(response).await;
    assert_eq!(page["page_title"], "404 - Seite nicht gefunden");
    assert_eq!(page["box"]["title"], "Oops!");
    assert_eq!(
        page["box"]["image"]["src"],
        "https://example.org/public/images/frank_lost_connection.png"
    );
    assert_eq!(page["box"]["button"]["url"], "https://example.org/community");
    assert_eq!(page["box"]["button"]["color"], "green");
    assert_eq!(page["news_slider"]["grid_size"], 6);
    assert!(
        page["news_slider"]["markup"]
            .as_str()
            .unwrap()
            .contains("Wartung am Sonntag")
    );
}

#[tokio::test]
async fn test_wrong_method_renders_access_denied_page() {
    let response = send(Method::POST, "/error/500").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let page = json_body(response).await;
    assert_eq!(page["page_title"], "Zugriff verweigert!");
    assert!(page["news_slider"].is_object());
}

#[tokio::test]
async fn test_wrong_method_on_host_route() {
    let response = send(Method::DELETE, "/hello").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_landing_page_without_failure_is_not_found() {
    let response = send(Method::GET, "/error").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_generic_internal_error_page() {
    let response = send(Method::GET, "/error/500").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let page = json_body(response).await;
    assert_eq!(page["page_title"], "500 - Irgendetwas ist schiefgelaufen!");
    assert_eq!(page["box"]["button"]["text"], "Zur&uuml;ck in die Community");
    assert!(page["news_slider"].is_object());

    let active: Vec<&str> = page["navigation"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|e| e["active"] == true)
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(active, vec!["Community"]);
}

#[tokio::test]
async fn test_incident_page_shows_detail() {
    let response = send(Method::GET, "/error/id/1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let page = json_body(response).await;
    let text = page["box"]["text"].as_str().unwrap();
    assert!(text.starts_with("<b>Fehler:</b> Undefined variable $user"));
    assert!(text.contains("<b>Zeile:</b> 17"));
    assert!(text.contains("14.11.2023 22:13:20 Uhr"));
    assert!(text.contains("<pre>{\n    \"a\": 1\n}</pre>"));
    assert_eq!(page["box"]["button"]["color"], "red");
    assert_eq!(page["box"]["button"]["url"], "https://example.org/profile/9");
    assert_eq!(page["box"]["button"]["text"], "Zur&uuml;ck zu /profile/9");
    assert!(page.get("news_slider").is_none());
}

#[tokio::test]
async fn test_other_incident_info_is_verbatim() {
    let page = json_body(send(Method::GET, "/error/id/2").await).await;
    assert!(
        page["box"]["text"]
            .as_str()
            .unwrap()
            .ends_with("<pre>{\"a\":1}</pre>")
    );
}

#[tokio::test]
async fn test_missing_incident_redirects_to_generic_page() {
    let response = send(Method::GET, "/error/id/404").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.org/error/500"
    );
}

#[tokio::test]
async fn test_non_numeric_incident_id_is_not_found() {
    let response = send(Method::GET, "/error/id/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let page = json_body(response).await;
    assert_eq!(page["page_title"], "404 - Seite nicht gefunden");
}

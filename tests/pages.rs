//! End-to-end tests against the fully built application router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bookfront_kernel::{settings::Settings, ModuleRegistry};

async fn app() -> Router {
    let mut registry = ModuleRegistry::new();
    bookfront::modules::register_all(&mut registry);

    let settings = Settings::default();
    bookfront_http::build_router(&registry, &settings)
        .await
        .unwrap()
}

async fn get(uri: &str) -> axum::response::Response {
    app()
        .await
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn healthz_responds_ok() {
    let response = get("/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn every_page_route_responds_ok() {
    for uri in ["/", "/book/add", "/authors", "/book/7"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }
}

#[tokio::test]
async fn book_detail_carries_the_requested_id() {
    let response = get("/book/42").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("data-book-id=\"42\""));
}

#[tokio::test]
async fn unknown_paths_render_the_not_found_page() {
    let response = get("/nonexistent").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_text(response).await;
    assert!(body.contains("404"));
}

#[tokio::test]
async fn malformed_book_ids_are_not_found() {
    for uri in ["/book/abc", "/book/-1", "/book/1.5"] {
        let response = get(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }
}

//! Operational endpoints and CORS.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

use finsight_gateway::{app_state::AppState, config, router::build_router};

fn state() -> AppState {
    AppState::new(config::GatewayConfig::default())
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn healthz_ok() {
    let req = Request::get("/healthz").body(Body::empty()).unwrap();
    let resp = build_router(state()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "ok");
}

#[tokio::test]
async fn metrics_reflect_requests() {
    let app = build_router(state());

    let req = Request::post("/api/company")
        .body(Body::from(r#"{"url": "a/b/TCS"}"#))
        .unwrap();
    app.clone().oneshot(req).await.unwrap();

    let req = Request::get("/metrics").body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let text = body_text(resp).await;
    assert!(text.contains("finsight_company_requests_total{outcome=\"ok\"} 1"), "{text}");
    assert!(text.contains("finsight_company_request_duration_micros_count{outcome=\"ok\"} 1"), "{text}");
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let req = Request::post("/api/company")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::from(r#"{"url": "a/b/TCS"}"#))
        .unwrap();
    let resp = build_router(state()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn preflight_is_answered() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/company")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let resp = build_router(state()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn cors_can_be_disabled() {
    let cfg = config::load_from_str("version: 1\ncors:\n  enabled: false\n").unwrap();
    let req = Request::post("/api/company")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::from(r#"{"url": "a/b/TCS"}"#))
        .unwrap();
    let resp = build_router(AppState::new(cfg)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

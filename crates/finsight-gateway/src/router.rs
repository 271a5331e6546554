//! Axum router wiring.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let cors_enabled = state.cfg().cors.enabled;

    let router = Router::new()
        .route(
            "/api/company",
            post(api::company::post_company).layer(DefaultBodyLimit::disable()),
        )
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        router.layer(open_cors())
    } else {
        router
    }
}

/// Any origin, any method, any header.
pub fn open_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

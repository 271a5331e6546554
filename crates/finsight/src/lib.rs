//! finsight: one dependency for the company metrics service.
//!
//! `core` carries request decoding, symbol extraction, and the placeholder
//! response model; `gateway` carries the axum router, config loader, and
//! metrics. Embedders build a router with
//! `gateway::router::build_router(gateway::app_state::AppState::new(cfg))`.

pub mod core {
    pub use finsight_core::*;
}

pub mod gateway {
    pub use finsight_gateway::*;
}

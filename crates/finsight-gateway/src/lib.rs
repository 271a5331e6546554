//! finsight gateway library entry.
//!
//! Wires config, the HTTP API, operational endpoints, and metrics into an
//! axum router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;

//! Lightweight in-process metrics.
//!
//! Series live in atomics and are rendered by the `/metrics` handler in
//! Prometheus text format.

pub mod metrics;

pub use metrics::GatewayMetrics;

//! finsight core: request/response contracts, symbol extraction, and errors.
//!
//! This crate defines the wire-level contracts and error surface used by the
//! gateway and by tests. It carries no HTTP or runtime dependencies so the
//! decoding rules can be exercised without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `FinsightError`/`Result`, so a malformed
//! body or URL turns into an error response instead of a crashed worker.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;
pub mod symbol;

/// Shared result type.
pub use error::{FinsightError, Result};

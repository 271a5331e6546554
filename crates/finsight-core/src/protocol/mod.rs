//! Wire formats for the company endpoint.
//!
//! Request decoding is panic-free: anything that is not a JSON object with a
//! usable `url` is reported as `FinsightError` rather than indexing into
//! untrusted input.

pub mod company;

pub use company::{CompanyRequest, CompanyResponse, CoreFinancials, Metric, Metrics};

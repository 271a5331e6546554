//! `POST /api/company` request and response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::error::{FinsightError, Result};

/// Fixed marker echoed in every successful response.
pub const TEST_RESPONSE: &str = "API is working";

/// Unit attached to every placeholder figure (crore).
pub const UNIT_CRORE: &str = "Cr";

/// Placeholder revenue figure.
pub const REVENUE: i64 = 1000;

/// Placeholder net profit figure.
pub const NET_PROFIT: i64 = 100;

/// Decoded request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRequest {
    pub url: String,
}

impl CompanyRequest {
    /// Decode a raw request body.
    ///
    /// The body must be a JSON object. A `url` that is absent, `null`, or
    /// otherwise empty (`""`, `false`, `0`, `[]`, `{}`) is treated as missing.
    ///
    /// # Errors
    /// - [`FinsightError::UrlRequired`] when `url` is missing or empty.
    /// - [`FinsightError::MalformedBody`] when the body is not JSON, is not an
    ///   object, or carries a non-string `url`.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let doc: Value = serde_json::from_slice(body)
            .map_err(|e| FinsightError::MalformedBody(format!("invalid JSON body: {e}")))?;

        let mut fields = match doc {
            Value::Object(fields) => fields,
            other => {
                return Err(FinsightError::MalformedBody(format!(
                    "request body must be a JSON object, got {}",
                    kind(&other)
                )))
            }
        };

        match fields.remove("url") {
            None => Err(FinsightError::UrlRequired),
            Some(v) if is_empty(&v) => Err(FinsightError::UrlRequired),
            Some(Value::String(url)) => Ok(Self { url }),
            Some(other) => Err(FinsightError::MalformedBody(format!(
                "url must be a string, got {}",
                kind(&other)
            ))),
        }
    }
}

fn is_empty(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single figure with its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub value: i64,
    pub unit: &'static str,
}

impl Metric {
    fn crore(value: i64) -> Self {
        Self { value, unit: UNIT_CRORE }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreFinancials {
    pub revenue: Metric,
    pub net_profit: Metric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub core_financials: CoreFinancials,
}

/// Successful response body. Clients read fields by key; order is not
/// part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyResponse {
    pub company_symbol: String,
    pub test_response: &'static str,
    pub metrics: Metrics,
}

impl CompanyResponse {
    /// Build the fixed response for `symbol`. Only the symbol varies.
    pub fn placeholder(symbol: impl Into<String>) -> Self {
        Self {
            company_symbol: symbol.into(),
            test_response: TEST_RESPONSE,
            metrics: Metrics {
                core_financials: CoreFinancials {
                    revenue: Metric::crore(REVENUE),
                    net_profit: Metric::crore(NET_PROFIT),
                },
            },
        }
    }
}

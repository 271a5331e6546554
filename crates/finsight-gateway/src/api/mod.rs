//! HTTP API handlers and their error mapping.
//!
//! Error bodies are always `{"error": "<message>"}`. Validation failures map
//! to 400; everything else is a 500 carrying the raw error text.

pub mod company;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use finsight_core::error::{ClientCode, FinsightError};

/// HTTP-facing wrapper around [`FinsightError`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub FinsightError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::ValidationError => StatusCode::BAD_REQUEST,
            ClientCode::UnhandledError | ClientCode::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.0.to_string() }));
        (self.status(), body).into_response()
    }
}

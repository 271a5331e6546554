//! `POST /api/company`: resolve a company symbol and return placeholder figures.

use std::time::Instant;

use axum::{
    extract::{rejection::BytesRejection, State},
    Json,
};
use bytes::Bytes;

use finsight_core::error::{ClientCode, FinsightError, Result};
use finsight_core::protocol::{CompanyRequest, CompanyResponse};
use finsight_core::symbol::company_symbol;

use super::ApiError;
use crate::app_state::AppState;

/// The body is taken as raw bytes so a wrong content type or unparsable JSON
/// ends up as a 500 with the parser's message. A body that cannot be read at
/// all is a 500 too. The route carries no body size limit.
pub async fn post_company(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> std::result::Result<Json<CompanyResponse>, ApiError> {
    let started = Instant::now();
    let result = body
        .map_err(|rejection| FinsightError::MalformedBody(rejection.body_text()))
        .and_then(|body| respond(&body));

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.client_code().as_str(),
    };
    let metrics = state.metrics();
    metrics.company_requests.inc(&[("outcome", outcome)]);
    metrics
        .company_request_duration
        .observe(&[("outcome", outcome)], started.elapsed());

    match result {
        Ok(resp) => {
            tracing::debug!(symbol = %resp.company_symbol, "company request served");
            Ok(Json(resp))
        }
        Err(e) => {
            if e.client_code() == ClientCode::ValidationError {
                tracing::debug!(error = %e, "company request rejected");
            } else {
                tracing::error!(error = %e, code = outcome, "error handling request");
            }
            Err(e.into())
        }
    }
}

fn respond(body: &[u8]) -> Result<CompanyResponse> {
    let req = CompanyRequest::from_slice(body)?;
    let symbol = company_symbol(&req.url)?;
    Ok(CompanyResponse::placeholder(symbol))
}

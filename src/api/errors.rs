use std::error::Error;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::{ErrorKind, LedgerError};

pub const INVALID_REQUEST: &str = "Invalid request";
pub const NOT_FOUND: &str = "Not found";

/// Error envelope returned for every rejected request.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub error: String
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        let (status_code, status) = match self.kind() {
            ErrorKind::InvalidRequest => (StatusCode::BAD_REQUEST, INVALID_REQUEST),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND)
        };

        match self.source() {
            Some(source) => warn!("{status} error: {source}, {self}"),
            None => warn!("{status} error: {self}")
        }

        let body = ErrorResponse {
            status: status.to_string(),
            error: self.to_string()
        };

        (status_code, Json(body)).into_response()
    }
}

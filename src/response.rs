//! HTTP response adapters
//!
//! Turns the pagination envelope and crate errors into axum responses.
//! Errors are rendered as JSON:API error documents.

use crate::error::Error;
use crate::pagination::PaginatedResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

impl<T: Serialize, M: Serialize> IntoResponse for PaginatedResponse<T, M> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// A JSON:API error object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// HTTP status code, as a string
    pub status: String,
    /// Short summary of the problem
    pub title: String,
    /// Explanation specific to this occurrence
    pub detail: String,
}

/// Top-level JSON:API error document: `{ "errors": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDocument {
    /// Error objects
    pub errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    /// Document holding a single error
    pub fn single(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorObject {
                status: status.as_u16().to_string(),
                title: status.canonical_reason().unwrap_or("Error").to_string(),
                detail: detail.into(),
            }],
        }
    }
}

impl From<&Error> for ErrorDocument {
    fn from(err: &Error) -> Self {
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let detail = match err {
            Error::InvalidPage { message } => format!("Invalid page. {message}"),
            _ if !err.is_client_error() => "Internal server error".to_string(),
            other => other.to_string(),
        };
        Self::single(status, detail)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let document = ErrorDocument::from(&self);
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if self.is_client_error() {
            tracing::debug!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(document)).into_response()
    }
}

//! Application error type and its HTTP rendering.
//!
//! Every failure of a pageview query ends up as exactly one [`AppError`]
//! and is rendered as `{"error": "<reason>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::params::ParamError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Client supplied a malformed title or date.
    #[error("{message}")]
    Validation { message: String },

    /// Valid input, but the upstream API has no data for it.
    #[error("{message}")]
    NotFound { message: String },

    /// Transport failure, cancellation, unexpected status or malformed body.
    #[error("{message}")]
    Upstream {
        message: String,
        status: Option<u16>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Upstream {
            message: message.into(),
            status,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ParamError> for AppError {
    fn from(err: ParamError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

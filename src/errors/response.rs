use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::codes::ErrorCode;

/// Wire envelope returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Body of the error envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Field-level violations, null when there are none
    pub details: Option<Vec<ErrorDetail>>,
}

/// One violation, usually tied to a request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Dotted path of the offending field, null for request-wide problems
    pub field: Option<String>,
    pub message: String,
}

impl ErrorDetail {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

/// Status code paired with the envelope sent to the client
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub envelope: ErrorEnvelope,
}

impl ErrorResponse {
    /// Create a new error response. An empty detail list is stored as `None`.
    pub fn new(
        status: StatusCode,
        code: ErrorCode,
        message: impl Into<String>,
        details: Vec<ErrorDetail>,
    ) -> Self {
        Self {
            status,
            envelope: ErrorEnvelope {
                error: ErrorBody {
                    code,
                    message: message.into(),
                    details: if details.is_empty() {
                        None
                    } else {
                        Some(details)
                    },
                },
            },
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.envelope.error.code
    }

    pub fn message(&self) -> &str {
        &self.envelope.error.message
    }

    pub fn details(&self) -> Option<&[ErrorDetail]> {
        self.envelope.error.details.as_deref()
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.envelope)).into_response()
    }
}

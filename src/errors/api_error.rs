use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use super::business::BusinessError;
use super::codes::ErrorCode;
use super::response::ErrorResponse;
use super::violations::{from_validation_errors, FieldViolation};

/// Top-level message for structural validation failures
pub const STRUCTURAL_VALIDATION_MESSAGE: &str = "input is invalid";

/// Message sent to the client for anything we could not classify
pub const INTERNAL_ERROR_MESSAGE: &str = "an internal server error occurred";

/// Every way a request can fail, as seen by the response layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// A violated application rule
    #[error(transparent)]
    Business(#[from] BusinessError),

    /// Request did not match the expected shape
    #[error("request failed structural validation ({} violations)", .0.len())]
    StructuralValidation(Vec<FieldViolation>),

    /// Failure that already carries an HTTP status
    #[error("{status}: {message}")]
    Transport { status: StatusCode, message: String },

    /// Anything else; never shown to the client
    #[error(transparent)]
    Unclassified(#[from] anyhow::Error),
}

impl ApiError {
    pub fn transport(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    pub fn from_validation(origin: &str, errors: &ValidationErrors) -> Self {
        Self::StructuralValidation(from_validation_errors(origin, errors))
    }

    /// Build the client-facing response. Pure and infallible.
    pub fn classify(&self) -> ErrorResponse {
        match self {
            Self::Business(err) => ErrorResponse::new(
                err.status_code(),
                err.code(),
                err.message(),
                err.details().to_vec(),
            ),
            Self::StructuralValidation(violations) => ErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationError,
                STRUCTURAL_VALIDATION_MESSAGE,
                violations.iter().map(FieldViolation::to_detail).collect(),
            ),
            Self::Transport { status, message } => ErrorResponse::new(
                *status,
                ErrorCode::from_status(*status),
                message.clone(),
                Vec::new(),
            ),
            Self::Unclassified(_) => ErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::InternalError,
                INTERNAL_ERROR_MESSAGE,
                Vec::new(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Unclassified(err) = &self {
            error!(error = ?err, "Unhandled error while processing request");
        }
        self.classify().into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::from_validation("body", &errors)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Unclassified(anyhow::Error::new(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_)
            | JsonRejection::MissingJsonContentType(_) => Self::StructuralValidation(vec![
                FieldViolation::new(["body"], rejection.body_text()),
            ]),
            other => Self::transport(other.status(), other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        match rejection {
            QueryRejection::FailedToDeserializeQueryString(_) => {
                Self::StructuralValidation(vec![FieldViolation::new(
                    ["query"],
                    rejection.body_text(),
                )])
            }
            other => Self::transport(other.status(), other.body_text()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(_) => {
                Self::StructuralValidation(vec![FieldViolation::new(
                    ["path"],
                    rejection.body_text(),
                )])
            }
            other => Self::transport(other.status(), other.body_text()),
        }
    }
}

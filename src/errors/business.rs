use axum::http::StatusCode;
use thiserror::Error;

use super::codes::ErrorCode;
use super::response::ErrorDetail;

/// Kind of business rule that was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Duplicate,
    EditPeriodExpired,
}

impl BusinessErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            Self::Validation => ErrorCode::ValidationError,
            Self::Unauthorized => ErrorCode::Unauthorized,
            Self::Forbidden => ErrorCode::Forbidden,
            Self::NotFound => ErrorCode::NotFound,
            Self::Duplicate => ErrorCode::DuplicateError,
            Self::EditPeriodExpired => ErrorCode::EditPeriodExpired,
        }
    }

    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Validation | Self::Duplicate => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden | Self::EditPeriodExpired => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::Validation => "input is invalid",
            Self::Unauthorized => "authentication failed",
            Self::Forbidden => "you do not have permission to perform this operation",
            Self::NotFound => "the requested resource was not found",
            Self::Duplicate => "the resource already exists",
            Self::EditPeriodExpired => "the edit period has expired",
        }
    }
}

/// A violated application rule, raised by handlers and turned into an
/// error envelope by [`ApiError`](super::ApiError).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct BusinessError {
    kind: BusinessErrorKind,
    message: String,
    details: Vec<ErrorDetail>,
}

impl BusinessError {
    pub fn new(kind: BusinessErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
            details: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_details(mut self, details: Vec<ErrorDetail>) -> Self {
        self.details = details;
        self
    }

    pub fn kind(&self) -> BusinessErrorKind {
        self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &[ErrorDetail] {
        &self.details
    }
}

/// Helpers for the common variants
impl BusinessError {
    pub fn validation(message: impl Into<String>, details: Vec<ErrorDetail>) -> Self {
        Self::new(BusinessErrorKind::Validation)
            .with_message(message)
            .with_details(details)
    }

    pub fn unauthorized() -> Self {
        Self::new(BusinessErrorKind::Unauthorized)
    }

    pub fn forbidden() -> Self {
        Self::new(BusinessErrorKind::Forbidden)
    }

    pub fn not_found() -> Self {
        Self::new(BusinessErrorKind::NotFound)
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::new(BusinessErrorKind::Duplicate).with_message(message)
    }

    pub fn edit_period_expired() -> Self {
        Self::new(BusinessErrorKind::EditPeriodExpired)
    }
}

//! Structured error handling for API responses

pub mod api_error;
pub mod business;
pub mod codes;
pub mod response;
pub mod violations;

pub use api_error::ApiError;
pub use business::{BusinessError, BusinessErrorKind};
pub use codes::ErrorCode;
pub use response::{ErrorBody, ErrorDetail, ErrorEnvelope, ErrorResponse};
pub use violations::FieldViolation;

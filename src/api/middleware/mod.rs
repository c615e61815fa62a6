pub mod errors;
pub mod logging;

pub use errors::{error_envelope_middleware, handle_panic};
pub use logging::logging_middleware;

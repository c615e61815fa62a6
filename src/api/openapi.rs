use utoipa::OpenApi;

use crate::api::handlers::{HealthResponse, RootResponse};
use crate::errors::{ErrorBody, ErrorCode, ErrorDetail, ErrorEnvelope};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sales Report API",
        description = "API for recording sales representatives' daily customer visits and collecting feedback from their managers. Every failed request returns the same error envelope.",
    ),
    paths(
        crate::api::handlers::root,
        crate::api::handlers::health,
        crate::api::handlers::health_ready,
    ),
    components(
        schemas(
            RootResponse,
            HealthResponse,
            ErrorEnvelope,
            ErrorBody,
            ErrorDetail,
            ErrorCode,
        )
    ),
    tags(
        (name = "general", description = "Service information and health checks")
    )
)]
pub struct ApiDoc;

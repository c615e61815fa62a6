use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::PaginationConfig;

/// Pagination query parameters
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PageRequest {
    /// Page number, starting at 1
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<u32>,
    /// Number of items per page
    #[validate(range(min = 1, message = "page_size must be at least 1"))]
    pub page_size: Option<u32>,
}

/// A page window resolved against the configured limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Page {
    pub page: u32,
    pub page_size: u32,
    pub offset: u64,
}

impl PageRequest {
    pub fn resolve(&self, config: &PaginationConfig) -> Page {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = self
            .page_size
            .unwrap_or(config.default_page_size)
            .clamp(1, config.max_page_size.max(1));

        Page {
            page,
            page_size,
            offset: u64::from(page - 1) * u64::from(page_size),
        }
    }
}

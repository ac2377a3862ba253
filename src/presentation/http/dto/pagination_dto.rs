use serde::Serialize;

use crate::application::use_cases::pagination::DEFAULT_PAGE_SIZE;

pub fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Serialize)]
pub struct PaginationMetaDto {
    pub offset: i64,
    pub limit: i64,
    pub total: i64,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::{ApplicationError, ApplicationResult};

/// Offset/limit page envelope: the total matching count plus one page of
/// results, mirroring the `{count, results}` wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(count: u64, results: Vec<T>) -> Self {
        Self { count, results }
    }
}

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// 1-based page number plus page size, validated and turned into an offset.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub offset: u64,
    pub limit: u32,
}

impl PageParams {
    pub fn new(page: u32, limit: u32) -> ApplicationResult<Self> {
        if page < 1 {
            return Err(ApplicationError::validation_field(
                "page",
                "page must be at least 1",
            ));
        }
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(ApplicationError::validation_field(
                "limit",
                format!("limit must be between 1 and {MAX_PAGE_LIMIT}"),
            ));
        }
        Ok(Self {
            offset: u64::from(page - 1) * u64::from(limit),
            limit,
        })
    }
}

//! Offset pagination for list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::config::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_SKIP};

/// `skip`/`limit` query parameters.
///
/// Records are always returned in primary-key order; no total is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Number of records to skip
    #[serde(default = "default_skip")]
    #[validate(range(max = 9_223_372_036_854_775_807u64, message = "skip is too large"))]
    #[param(minimum = 0)]
    pub skip: u64,
    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100)]
    pub limit: u64,
}

fn default_skip() -> u64 {
    DEFAULT_PAGE_SKIP
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_LIMIT
}

impl PageParams {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_PAGE_SKIP,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

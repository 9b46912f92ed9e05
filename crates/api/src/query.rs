//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination query (`?page=`), 1-based.
///
/// Out-of-range values are clamped by `plover_core::pagination::Pager`, so
/// any integer is accepted here.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

//! Shared response envelope types for API handlers.
//!
//! Single-entity responses use a `{ "data": ... }` envelope; paginated feeds
//! serialize `plover_core::pagination::Page` at the top level.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: post }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

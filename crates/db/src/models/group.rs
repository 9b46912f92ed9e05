//! Group (community) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use plover_core::types::DbId;

/// A row from the `groups` table.
///
/// The slug is the URL-safe identifier used in `/group/{slug}` routes and is
/// immutable after creation (enforced by the absence of any update path).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Group {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// DTO for creating a new group (management action, no user-facing route).
#[derive(Debug, Deserialize)]
pub struct CreateGroup {
    pub title: String,
    pub slug: String,
    pub description: String,
}

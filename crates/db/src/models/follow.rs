//! Follow entity model: a directed, unique, non-reflexive subscription from
//! one user (the follower) to another (the followed author).

use serde::Serialize;
use sqlx::FromRow;

use plover_core::types::{DbId, Timestamp};

/// A row from the `follows` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Follow {
    pub id: DbId,
    /// The follower.
    pub user_id: DbId,
    /// The followed author.
    pub author_id: DbId,
    pub created_at: Timestamp,
}

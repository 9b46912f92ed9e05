//! Comment entity model and DTOs. Comments are immutable after creation.

use serde::Serialize;
use sqlx::FromRow;

use plover_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub author_id: DbId,
    pub text: String,
    pub created: Timestamp,
}

/// DTO for creating a comment. Author and post are stamped by the handler.
#[derive(Debug)]
pub struct CreateComment {
    pub post_id: DbId,
    pub author_id: DbId,
    pub text: String,
}

/// Comment row joined with the author's username, as served under a post
/// detail.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentFeedItem {
    pub id: DbId,
    pub post_id: DbId,
    pub author_id: DbId,
    pub author_username: String,
    pub text: String,
    pub created: Timestamp,
}

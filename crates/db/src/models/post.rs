//! Post entity model, DTOs, and feed projection.

use serde::Serialize;
use sqlx::FromRow;

use plover_core::types::{DbId, Timestamp};

/// Raw row from the `posts` table.
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: DbId,
    pub text: String,
    pub pub_date: Timestamp,
    pub group_id: Option<DbId>,
    pub author_id: DbId,
    pub image: Option<String>,
}

/// DTO for creating a post. The author comes from the authenticated viewer,
/// never from the submission body.
#[derive(Debug)]
pub struct CreatePost {
    pub text: String,
    pub group_id: Option<DbId>,
    pub author_id: DbId,
    pub image: Option<String>,
}

/// DTO for the author-only edit flow. `pub_date` and `author_id` are
/// immutable; only these three fields can change.
#[derive(Debug)]
pub struct UpdatePost {
    pub text: String,
    pub group_id: Option<DbId>,
    pub image: Option<String>,
}

/// Post row joined with author username and group slug, as served by every
/// feed and detail endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostFeedItem {
    pub id: DbId,
    pub text: String,
    pub pub_date: Timestamp,
    pub author_id: DbId,
    pub author_username: String,
    pub group_id: Option<DbId>,
    pub group_slug: Option<String>,
    pub image: Option<String>,
}

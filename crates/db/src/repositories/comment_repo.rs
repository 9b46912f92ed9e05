//! Repository for the `comments` table.
//!
//! Comments have no update path; they are created, listed newest-first, and
//! removed only by cascade when their post or author is deleted.

use sqlx::PgPool;

use plover_core::types::DbId;

use crate::models::comment::{Comment, CommentFeedItem, CreateComment};

const COLUMNS: &str = "id, post_id, author_id, text, created";

/// Provides create and listing operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row. `created` is stamped
    /// by the database.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (post_id, author_id, text)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.post_id)
            .bind(input.author_id)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// List all comments under a post, newest first.
    pub async fn list_by_post(
        pool: &PgPool,
        post_id: DbId,
    ) -> Result<Vec<CommentFeedItem>, sqlx::Error> {
        sqlx::query_as::<_, CommentFeedItem>(
            "SELECT c.id, c.post_id, c.author_id, u.username AS author_username,
                    c.text, c.created
             FROM comments c
             JOIN users u ON u.id = c.author_id
             WHERE c.post_id = $1
             ORDER BY c.created DESC, c.id DESC",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
    }

    /// Count comments under a post.
    pub async fn count_by_post(pool: &PgPool, post_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(pool)
            .await
    }
}

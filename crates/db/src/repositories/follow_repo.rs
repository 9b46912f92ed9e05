//! Repository for the `follows` table.
//!
//! The table carries `uq_follows_user_author` and `ck_follows_no_self_follow`
//! as backstops, but handlers are expected to check [`FollowRepo::exists`]
//! and the self-follow case first and treat both as no-ops.

use sqlx::PgPool;

use plover_core::types::DbId;

use crate::models::follow::Follow;

const COLUMNS: &str = "id, user_id, author_id, created_at";

/// Provides follow/unfollow operations.
pub struct FollowRepo;

impl FollowRepo {
    /// Insert a follow edge from `user_id` to `author_id`.
    ///
    /// Violating the unique or no-self-follow constraint surfaces as a
    /// database error; callers guard those cases before calling.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        author_id: DbId,
    ) -> Result<Follow, sqlx::Error> {
        let query = format!(
            "INSERT INTO follows (user_id, author_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Follow>(&query)
            .bind(user_id)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// Whether `user_id` follows `author_id`.
    pub async fn exists(pool: &PgPool, user_id: DbId, author_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE user_id = $1 AND author_id = $2)",
        )
        .bind(user_id)
        .bind(author_id)
        .fetch_one(pool)
        .await
    }

    /// Delete the follow edge from `user_id` to the author with the given
    /// username, if present.
    ///
    /// Matches on username rather than id so unfollow needs no prior author
    /// lookup. Returns `true` if a row was deleted.
    pub async fn delete_by_author_username(
        pool: &PgPool,
        user_id: DbId,
        author_username: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM follows
             WHERE user_id = $1
               AND author_id = (SELECT id FROM users WHERE username = $2)",
        )
        .bind(user_id)
        .bind(author_username)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count follow edges from `user_id` to `author_id` (0 or 1 under the
    /// unique constraint; used by idempotency tests).
    pub async fn count_pair(
        pool: &PgPool,
        user_id: DbId,
        author_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE user_id = $1 AND author_id = $2")
            .bind(user_id)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }
}

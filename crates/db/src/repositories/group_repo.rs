//! Repository for the `groups` table.
//!
//! Groups are created and deleted through management actions only; the
//! user-facing routes just read them.

use sqlx::PgPool;

use plover_core::types::DbId;

use crate::models::group::{CreateGroup, Group};

const COLUMNS: &str = "id, title, slug, description";

/// Provides CRUD operations for groups.
pub struct GroupRepo;

impl GroupRepo {
    /// Insert a new group, returning the created row.
    ///
    /// Fails with a unique-constraint error if the slug is taken.
    pub async fn create(pool: &PgPool, input: &CreateGroup) -> Result<Group, sqlx::Error> {
        let query = format!(
            "INSERT INTO groups (title, slug, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Group>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a group by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM groups WHERE id = $1");
        sqlx::query_as::<_, Group>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a group by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Group>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM groups WHERE slug = $1");
        sqlx::query_as::<_, Group>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete a group. Posts referencing it keep existing with their
    /// `group_id` cleared (ON DELETE SET NULL).
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM groups WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `posts` table.
//!
//! Every listing query orders newest-first (`pub_date DESC, id DESC` -- the
//! id tiebreak keeps pagination stable when timestamps collide), so callers
//! never re-sort.

use sqlx::PgPool;

use plover_core::types::DbId;

use crate::models::post::{CreatePost, Post, PostFeedItem, UpdatePost};

/// Raw post columns.
const COLUMNS: &str = "id, text, pub_date, group_id, author_id, image";

/// Joined projection served by feeds and the post detail.
const FEED_COLUMNS: &str = "p.id, p.text, p.pub_date, p.author_id, \
    u.username AS author_username, p.group_id, g.slug AS group_slug, p.image";

const FEED_FROM: &str = "FROM posts p
    JOIN users u ON u.id = p.author_id
    LEFT JOIN groups g ON g.id = p.group_id";

const FEED_ORDER: &str = "ORDER BY p.pub_date DESC, p.id DESC LIMIT $1 OFFSET $2";

/// Provides CRUD and feed queries for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row. `pub_date` is stamped
    /// by the database and never changes afterwards.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (text, group_id, author_id, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.text)
            .bind(input.group_id)
            .bind(input.author_id)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Find a raw post row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a post joined with its author username and group slug.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<PostFeedItem>, sqlx::Error> {
        let query = format!("SELECT {FEED_COLUMNS} {FEED_FROM} WHERE p.id = $1");
        sqlx::query_as::<_, PostFeedItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply an author-edit to a post. Only text, group, and image change;
    /// `pub_date` and `author_id` stay as created.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET text = $2, group_id = $3, image = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.text)
            .bind(input.group_id)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Count all posts.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }

    /// List one page of the global feed.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostFeedItem>, sqlx::Error> {
        let query = format!("SELECT {FEED_COLUMNS} {FEED_FROM} {FEED_ORDER}");
        sqlx::query_as::<_, PostFeedItem>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count posts in a group.
    pub async fn count_by_group(pool: &PgPool, group_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE group_id = $1")
            .bind(group_id)
            .fetch_one(pool)
            .await
    }

    /// List one page of a group's feed.
    pub async fn list_page_by_group(
        pool: &PgPool,
        group_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostFeedItem>, sqlx::Error> {
        let query = format!("SELECT {FEED_COLUMNS} {FEED_FROM} WHERE p.group_id = $3 {FEED_ORDER}");
        sqlx::query_as::<_, PostFeedItem>(&query)
            .bind(limit)
            .bind(offset)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }

    /// Count posts by an author.
    pub async fn count_by_author(pool: &PgPool, author_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// List one page of an author's feed.
    pub async fn list_page_by_author(
        pool: &PgPool,
        author_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostFeedItem>, sqlx::Error> {
        let query =
            format!("SELECT {FEED_COLUMNS} {FEED_FROM} WHERE p.author_id = $3 {FEED_ORDER}");
        sqlx::query_as::<_, PostFeedItem>(&query)
            .bind(limit)
            .bind(offset)
            .bind(author_id)
            .fetch_all(pool)
            .await
    }

    /// Count posts whose author is followed by `user_id`.
    pub async fn count_followed(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM posts
             WHERE author_id IN (SELECT author_id FROM follows WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// List one page of the followed-authors feed for `user_id`: posts whose
    /// author appears in the set of authors that `user_id` follows.
    pub async fn list_page_followed(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostFeedItem>, sqlx::Error> {
        let query = format!(
            "SELECT {FEED_COLUMNS} {FEED_FROM}
             WHERE p.author_id IN (SELECT author_id FROM follows WHERE user_id = $3)
             {FEED_ORDER}"
        );
        sqlx::query_as::<_, PostFeedItem>(&query)
            .bind(limit)
            .bind(offset)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}

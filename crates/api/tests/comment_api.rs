//! Integration tests for comment submission.
//!
//! Comment failures are absorbed silently: anonymous viewers and invalid
//! bodies get the same redirect to the post detail with nothing persisted.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, location, post_json, post_json_auth, signup};
use sqlx::PgPool;

use plover_db::models::post::CreatePost;
use plover_db::repositories::{CommentRepo, PostRepo, UserRepo};

async fn seed_post(pool: &PgPool, author_username: &str) -> i64 {
    let author = UserRepo::find_by_username(pool, author_username)
        .await
        .unwrap()
        .expect("user should exist");
    PostRepo::create(
        pool,
        &CreatePost {
            text: "commentable".to_string(),
            group_id: None,
            author_id: author.id,
            image: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_authenticated_comment_persists_and_redirects(pool: PgPool) {
    let token = signup(&pool, "author").await;
    let post_id = seed_post(&pool, "author").await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/posts/{post_id}/comment"),
        serde_json::json!({"text": "nice one"}),
        &token,
    )
    .await;
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), format!("/posts/{post_id}"));

    // The comment shows up on the detail page with its author.
    let response = get(build_test_app(pool), &format!("/posts/{post_id}")).await;
    let json = body_json(response).await;
    let comments = json["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], "nice one");
    assert_eq!(comments[0]["author_username"], "author");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_comment_redirects_silently(pool: PgPool) {
    signup(&pool, "author").await;
    let post_id = seed_post(&pool, "author").await;

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/posts/{post_id}/comment"),
        serde_json::json!({"text": "anonymous shout"}),
    )
    .await;
    // Same redirect as success, no login bounce, nothing stored.
    assert!(response.status().is_redirection());
    assert_eq!(location(&response), format!("/posts/{post_id}"));
    assert_eq!(CommentRepo::count_by_post(&pool, post_id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_comment_redirects_silently(pool: PgPool) {
    let token = signup(&pool, "author").await;
    let post_id = seed_post(&pool, "author").await;

    for body in [serde_json::json!({}), serde_json::json!({"text": "  "})] {
        let response = post_json_auth(
            build_test_app(pool.clone()),
            &format!("/posts/{post_id}/comment"),
            body,
            &token,
        )
        .await;
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), format!("/posts/{post_id}"));
    }

    assert_eq!(CommentRepo::count_by_post(&pool, post_id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_on_unknown_post_returns_404(pool: PgPool) {
    let token = signup(&pool, "author").await;
    let response = post_json_auth(
        build_test_app(pool),
        "/posts/999999/comment",
        serde_json::json!({"text": "into the void"}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comments_listed_newest_first(pool: PgPool) {
    let token = signup(&pool, "author").await;
    let post_id = seed_post(&pool, "author").await;

    for text in ["first", "second", "third"] {
        post_json_auth(
            build_test_app(pool.clone()),
            &format!("/posts/{post_id}/comment"),
            serde_json::json!({"text": text}),
            &token,
        )
        .await;
    }

    let response = get(build_test_app(pool), &format!("/posts/{post_id}")).await;
    let json = body_json(response).await;
    let texts: Vec<&str> = json["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["third", "second", "first"]);
}

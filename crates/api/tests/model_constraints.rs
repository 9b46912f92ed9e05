//! Repository-level tests for the storage constraints backing the domain
//! rules: unique/no-self-follow on `follows` and referential behaviour on
//! delete.

mod common;

use sqlx::PgPool;

use plover_db::models::comment::CreateComment;
use plover_db::models::group::CreateGroup;
use plover_db::models::post::CreatePost;
use plover_db::models::user::CreateUser;
use plover_db::repositories::{CommentRepo, FollowRepo, GroupRepo, PostRepo, UserRepo};

async fn seed_user(pool: &PgPool, username: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            display_name: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn constraint_name(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint().unwrap_or("").to_string(),
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_follow_violates_unique_constraint(pool: PgPool) {
    let reader = seed_user(&pool, "reader").await;
    let author = seed_user(&pool, "author").await;

    FollowRepo::create(&pool, reader, author).await.unwrap();
    let err = FollowRepo::create(&pool, reader, author)
        .await
        .expect_err("second identical follow must be rejected by storage");
    assert_eq!(constraint_name(&err), "uq_follows_user_author");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_self_follow_violates_check_constraint(pool: PgPool) {
    let reader = seed_user(&pool, "reader").await;

    let err = FollowRepo::create(&pool, reader, reader)
        .await
        .expect_err("self-follow must be rejected by storage");
    assert_eq!(constraint_name(&err), "ck_follows_no_self_follow");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_group_delete_detaches_posts(pool: PgPool) {
    let author = seed_user(&pool, "author").await;
    let group = GroupRepo::create(
        &pool,
        &CreateGroup {
            title: "Doomed".to_string(),
            slug: "doomed".to_string(),
            description: String::new(),
        },
    )
    .await
    .unwrap();
    let post = PostRepo::create(
        &pool,
        &CreatePost {
            text: "survives the group".to_string(),
            group_id: Some(group.id),
            author_id: author,
            image: None,
        },
    )
    .await
    .unwrap();

    assert!(GroupRepo::delete(&pool, group.id).await.unwrap());

    // The post survives with its group reference cleared.
    let post = PostRepo::find_by_id(&pool, post.id).await.unwrap().unwrap();
    assert_eq!(post.group_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_delete_cascades_content_and_follows(pool: PgPool) {
    let author = seed_user(&pool, "author").await;
    let fan = seed_user(&pool, "fan").await;

    let post = PostRepo::create(
        &pool,
        &CreatePost {
            text: "doomed post".to_string(),
            group_id: None,
            author_id: author,
            image: None,
        },
    )
    .await
    .unwrap();
    CommentRepo::create(
        &pool,
        &CreateComment {
            post_id: post.id,
            author_id: fan,
            text: "doomed comment".to_string(),
        },
    )
    .await
    .unwrap();
    FollowRepo::create(&pool, fan, author).await.unwrap();

    assert!(UserRepo::delete(&pool, author).await.unwrap());

    assert!(PostRepo::find_by_id(&pool, post.id).await.unwrap().is_none());
    assert_eq!(CommentRepo::count_by_post(&pool, post.id).await.unwrap(), 0);
    assert_eq!(FollowRepo::count_pair(&pool, fan, author).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_comment_author_delete_removes_only_their_comments(pool: PgPool) {
    let author = seed_user(&pool, "author").await;
    let fan = seed_user(&pool, "fan").await;

    let post = PostRepo::create(
        &pool,
        &CreatePost {
            text: "sticks around".to_string(),
            group_id: None,
            author_id: author,
            image: None,
        },
    )
    .await
    .unwrap();
    CommentRepo::create(
        &pool,
        &CreateComment {
            post_id: post.id,
            author_id: fan,
            text: "from the fan".to_string(),
        },
    )
    .await
    .unwrap();
    CommentRepo::create(
        &pool,
        &CreateComment {
            post_id: post.id,
            author_id: author,
            text: "from the author".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(UserRepo::delete(&pool, fan).await.unwrap());

    // The post and the author's own comment remain.
    assert!(PostRepo::find_by_id(&pool, post.id).await.unwrap().is_some());
    let remaining = CommentRepo::list_by_post(&pool, post.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].text, "from the author");
}

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree (mounted at the root).
///
/// Route hierarchy:
///
/// ```text
/// /                                 index feed (paginated)
/// /group/{slug}                     group feed (paginated)
/// /profile/{username}               author feed + follow state (paginated)
/// /profile/{username}/follow        follow author (auth, GET/POST)
/// /profile/{username}/unfollow      unfollow author (auth, GET/POST)
/// /posts/{id}                       post detail + comments
/// /posts/{id}/edit                  edit form / apply edit (author only)
/// /posts/{id}/comment               add comment (POST, auth soft)
/// /create                           post form / create post (auth)
/// /follow                           followed-authors feed (auth, paginated)
///
/// /auth/signup                      create account (public)
/// /auth/login                       obtain access token (public)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::posts::index))
        .route("/group/{slug}", get(handlers::groups::group_posts))
        .route("/profile/{username}", get(handlers::profiles::profile))
        .route(
            "/profile/{username}/follow",
            get(handlers::follows::profile_follow).post(handlers::follows::profile_follow),
        )
        .route(
            "/profile/{username}/unfollow",
            get(handlers::follows::profile_unfollow).post(handlers::follows::profile_unfollow),
        )
        .route("/posts/{id}", get(handlers::posts::post_detail))
        .route(
            "/posts/{id}/edit",
            get(handlers::posts::edit_form).post(handlers::posts::post_edit),
        )
        .route("/posts/{id}/comment", post(handlers::comments::add_comment))
        .route(
            "/create",
            get(handlers::posts::create_form).post(handlers::posts::post_create),
        )
        .route("/follow", get(handlers::follows::follow_index))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
}

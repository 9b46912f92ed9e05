//! Handlers for the followed-authors feed and follow/unfollow actions.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use plover_core::pagination::Pager;
use plover_db::repositories::{FollowRepo, PostRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{login_redirect, redirect_to};
use crate::middleware::auth::Viewer;
use crate::query::PageParams;
use crate::state::AppState;

/// GET /follow
///
/// Paginated, newest-first feed of posts whose author the viewer follows.
pub async fn follow_index(
    viewer: Viewer,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Response> {
    let Some(user) = viewer.user() else {
        return Ok(login_redirect("/follow"));
    };

    let total = PostRepo::count_followed(&state.pool, user.user_id).await?;
    let pager = Pager::new(total, state.config.page_size, params.page);
    let posts =
        PostRepo::list_page_followed(&state.pool, user.user_id, pager.limit(), pager.offset())
            .await?;

    Ok(Json(pager.into_page(posts)).into_response())
}

/// GET/POST /profile/{username}/follow
///
/// Follow the target author, then redirect to their profile. A self-follow
/// or an already-present follow is a no-op, not an error; the storage
/// constraints behind this are defense-in-depth only. Unknown username -> 404.
pub async fn profile_follow(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Response> {
    let Some(user) = viewer.user() else {
        return Ok(login_redirect(&format!("/profile/{username}/follow")));
    };

    let author = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{username}' not found")))?;

    if user.user_id != author.id && !FollowRepo::exists(&state.pool, user.user_id, author.id).await?
    {
        FollowRepo::create(&state.pool, user.user_id, author.id).await?;
        tracing::info!(
            user_id = user.user_id,
            author_id = author.id,
            "Follow created"
        );
    }

    Ok(redirect_to(&format!("/profile/{username}")))
}

/// GET/POST /profile/{username}/unfollow
///
/// Delete the matching follow row if present (no-op if absent), then
/// redirect to the target profile.
pub async fn profile_unfollow(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Response> {
    let Some(user) = viewer.user() else {
        return Ok(login_redirect(&format!("/profile/{username}/unfollow")));
    };

    let deleted =
        FollowRepo::delete_by_author_username(&state.pool, user.user_id, &username).await?;
    if deleted {
        tracing::info!(
            user_id = user.user_id,
            author_username = %username,
            "Follow deleted"
        );
    }

    Ok(redirect_to(&format!("/profile/{username}")))
}

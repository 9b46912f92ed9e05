//! Handler for author profile pages.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use plover_core::pagination::{Page, Pager};
use plover_db::models::post::PostFeedItem;
use plover_db::models::user::UserResponse;
use plover_db::repositories::{FollowRepo, PostRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::Viewer;
use crate::query::PageParams;
use crate::state::AppState;

/// Payload for `GET /profile/{username}`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub author: UserResponse,
    /// Whether the current viewer follows this author. Always false for
    /// anonymous viewers and for authors viewing themselves.
    pub following: bool,
    #[serde(flatten)]
    pub page: Page<PostFeedItem>,
}

/// GET /profile/{username}
///
/// Paginated, newest-first feed of the author's posts plus the viewer's
/// follow state. Unknown username -> 404.
pub async fn profile(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<ProfileResponse>> {
    let author = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{username}' not found")))?;

    let following = match viewer.user() {
        Some(user) if user.user_id != author.id => {
            FollowRepo::exists(&state.pool, user.user_id, author.id).await?
        }
        _ => false,
    };

    let total = PostRepo::count_by_author(&state.pool, author.id).await?;
    let pager = Pager::new(total, state.config.page_size, params.page);
    let posts =
        PostRepo::list_page_by_author(&state.pool, author.id, pager.limit(), pager.offset())
            .await?;

    Ok(Json(ProfileResponse {
        author: UserResponse::from(&author),
        following,
        page: pager.into_page(posts),
    }))
}

//! Handler for the per-group feed.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use plover_core::pagination::{Page, Pager};
use plover_db::models::group::Group;
use plover_db::models::post::PostFeedItem;
use plover_db::repositories::{GroupRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// Payload for `GET /group/{slug}`: the group plus its feed page, flattened
/// so pagination fields sit at the top level like every other feed.
#[derive(Debug, Serialize)]
pub struct GroupFeedResponse {
    pub group: Group,
    #[serde(flatten)]
    pub page: Page<PostFeedItem>,
}

/// GET /group/{slug}
///
/// Paginated, newest-first feed of the group's posts. Unknown slug -> 404.
pub async fn group_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<GroupFeedResponse>> {
    let group = GroupRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Group '{slug}' not found")))?;

    let total = PostRepo::count_by_group(&state.pool, group.id).await?;
    let pager = Pager::new(total, state.config.page_size, params.page);
    let posts =
        PostRepo::list_page_by_group(&state.pool, group.id, pager.limit(), pager.offset()).await?;

    Ok(Json(GroupFeedResponse {
        group,
        page: pager.into_page(posts),
    }))
}

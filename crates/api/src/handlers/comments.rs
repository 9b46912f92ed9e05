//! Handler for comment submission.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use plover_core::error::CoreError;
use plover_core::forms::CommentForm;
use plover_core::types::DbId;
use plover_db::models::comment::CreateComment;
use plover_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::redirect_to;
use crate::middleware::auth::Viewer;
use crate::state::AppState;

/// POST /posts/{id}/comment
///
/// Create a comment authored by the viewer, then redirect to the post
/// detail. Unknown post -> 404.
///
/// Unlike post create/edit, this path absorbs failures silently: anonymous
/// viewers and invalid submissions get the same redirect with nothing
/// persisted and no error surfaced. The asymmetry is deliberate, observed
/// behaviour and is preserved as such.
pub async fn add_comment(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<CommentForm>, JsonRejection>,
) -> AppResult<Response> {
    let post = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    let detail = format!("/posts/{}", post.id);

    let Some(user) = viewer.user() else {
        return Ok(redirect_to(&detail));
    };
    let Ok(Json(form)) = body else {
        return Ok(redirect_to(&detail));
    };
    let Ok(draft) = form.validate() else {
        return Ok(redirect_to(&detail));
    };

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            post_id: post.id,
            author_id: user.user_id,
            text: draft.text,
        },
    )
    .await?;

    tracing::info!(
        user_id = user.user_id,
        post_id = post.id,
        comment_id = comment.id,
        "Comment created"
    );

    Ok(redirect_to(&detail))
}

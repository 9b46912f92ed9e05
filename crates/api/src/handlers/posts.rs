//! Handlers for the post feed, post detail, and the create/edit flows.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use plover_core::error::CoreError;
use plover_core::forms::{CommentForm, PostForm};
use plover_core::pagination::{Page, Pager};
use plover_core::types::DbId;
use plover_db::models::comment::CommentFeedItem;
use plover_db::models::post::{CreatePost, Post, PostFeedItem, UpdatePost};
use plover_db::repositories::{CommentRepo, GroupRepo, PostRepo};

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::handlers::{login_redirect, redirect_to};
use crate::middleware::auth::Viewer;
use crate::query::PageParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload for `GET /posts/{id}`: the post, its comments newest-first, and
/// an empty comment-submission form.
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub post: PostFeedItem,
    pub comments: Vec<CommentFeedItem>,
    pub comment_form: CommentForm,
}

/// GET /
///
/// Paginated, newest-first feed of all posts.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Page<PostFeedItem>>> {
    let total = PostRepo::count_all(&state.pool).await?;
    let pager = Pager::new(total, state.config.page_size, params.page);
    let posts = PostRepo::list_page(&state.pool, pager.limit(), pager.offset()).await?;
    Ok(Json(pager.into_page(posts)))
}

/// GET /posts/{id}
///
/// Single post with its comments (newest first).
pub async fn post_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PostDetailResponse>> {
    let post = PostRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    let comments = CommentRepo::list_by_post(&state.pool, id).await?;

    Ok(Json(PostDetailResponse {
        post,
        comments,
        comment_form: CommentForm::default(),
    }))
}

/// GET /create
///
/// Empty post form for authenticated viewers; guests are sent to login.
pub async fn create_form(viewer: Viewer) -> AppResult<Response> {
    match viewer.user() {
        Some(_) => Ok(Json(DataResponse {
            data: PostForm::default(),
        })
        .into_response()),
        None => Ok(login_redirect("/create")),
    }
}

/// POST /create
///
/// Create a post authored by the viewer, then redirect to their profile.
/// Invalid submissions return 400 with the validation error and persist
/// nothing.
pub async fn post_create(
    viewer: Viewer,
    State(state): State<AppState>,
    body: Result<Json<PostForm>, JsonRejection>,
) -> AppResult<Response> {
    let Some(user) = viewer.user() else {
        return Ok(login_redirect("/create"));
    };

    let form = parse_form(body)?;
    let draft = form.validate().map_err(CoreError::Validation)?;
    ensure_group_exists(&state, draft.group_id).await?;

    let post = PostRepo::create(
        &state.pool,
        &CreatePost {
            text: draft.text,
            group_id: draft.group_id,
            author_id: user.user_id,
            image: stored_image_path(&state.config, draft.image),
        },
    )
    .await?;

    tracing::info!(user_id = user.user_id, post_id = post.id, "Post created");

    Ok(redirect_to(&format!("/profile/{}", user.username)))
}

/// GET /posts/{id}/edit
///
/// Prefilled edit form. Guests go to login (with `next` back here); a viewer
/// who is not the author is silently redirected to the post detail.
pub async fn edit_form(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let Some(user) = viewer.user() else {
        return Ok(login_redirect(&format!("/posts/{id}/edit")));
    };

    let post = find_post(&state, id).await?;
    if post.author_id != user.user_id {
        return Ok(redirect_to(&format!("/posts/{id}")));
    }

    let form = PostForm {
        text: Some(post.text),
        group: post.group_id,
        image: submitted_image_name(&state.config, post.image),
    };
    Ok(Json(DataResponse { data: form }).into_response())
}

/// POST /posts/{id}/edit
///
/// Apply an author-only edit to text/group/image; `pub_date` and `author`
/// never change. Non-authors are redirected to the detail page with no error
/// surfaced and nothing persisted.
pub async fn post_edit(
    viewer: Viewer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<PostForm>, JsonRejection>,
) -> AppResult<Response> {
    let Some(user) = viewer.user() else {
        return Ok(login_redirect(&format!("/posts/{id}/edit")));
    };

    let post = find_post(&state, id).await?;
    if post.author_id != user.user_id {
        return Ok(redirect_to(&format!("/posts/{id}")));
    }

    let form = parse_form(body)?;
    let draft = form.validate().map_err(CoreError::Validation)?;
    ensure_group_exists(&state, draft.group_id).await?;

    PostRepo::update(
        &state.pool,
        id,
        &UpdatePost {
            text: draft.text,
            group_id: draft.group_id,
            image: stored_image_path(&state.config, draft.image),
        },
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(user_id = user.user_id, post_id = id, "Post updated");

    Ok(redirect_to(&format!("/posts/{id}")))
}

/// Load a raw post row or 404.
async fn find_post(state: &AppState, id: DbId) -> AppResult<Post> {
    PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Post", id }))
}

/// Unwrap the JSON body, mapping body rejections to a validation error.
fn parse_form(body: Result<Json<PostForm>, JsonRejection>) -> AppResult<PostForm> {
    match body {
        Ok(Json(form)) => Ok(form),
        Err(rejection) => Err(AppError::Core(CoreError::Validation(format!(
            "Invalid request body: {rejection}"
        )))),
    }
}

/// A submitted group must exist; a dangling reference is a form error, not a
/// 404.
async fn ensure_group_exists(state: &AppState, group_id: Option<DbId>) -> AppResult<()> {
    if let Some(group_id) = group_id {
        if GroupRepo::find_by_id(&state.pool, group_id).await?.is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Group {group_id} does not exist"
            ))));
        }
    }
    Ok(())
}

/// Join a submitted image name onto the configured upload prefix.
fn stored_image_path(config: &ServerConfig, image: Option<String>) -> Option<String> {
    image.map(|name| format!("{}{name}", config.upload_prefix))
}

/// Inverse of [`stored_image_path`] for form prefill.
fn submitted_image_name(config: &ServerConfig, stored: Option<String>) -> Option<String> {
    stored.map(|path| {
        path.strip_prefix(&config.upload_prefix)
            .unwrap_or(&path)
            .to_string()
    })
}

//! Request handlers, one module per resource.
//!
//! Handlers that require authentication never return 401 for guests; they
//! issue a redirect to `/login?next=<original path>` so the client can come
//! back to its intended destination (the login UI itself is an external
//! collaborator). "Soft denial" outcomes (non-author edits, self-follows,
//! duplicate follows, bad comment submissions) redirect to a neutral page
//! with nothing persisted and no error surfaced.

pub mod auth;
pub mod comments;
pub mod follows;
pub mod groups;
pub mod posts;
pub mod profiles;

use axum::response::{IntoResponse, Redirect, Response};

/// Redirect a guest to the login flow, preserving the requested path.
pub(crate) fn login_redirect(next: &str) -> Response {
    Redirect::to(&format!("/login?next={next}")).into_response()
}

/// Plain redirect to an application path.
pub(crate) fn redirect_to(location: &str) -> Response {
    Redirect::to(location).into_response()
}

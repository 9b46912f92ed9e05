//! Viewer identity extractor for Axum handlers.
//!
//! Every handler that branches on authentication consumes a [`Viewer`] with
//! exactly two variants, rather than probing an ambient "is authenticated"
//! flag. Extraction never rejects: a missing, malformed, or expired Bearer
//! token yields [`Viewer::Anonymous`], and the handler decides whether that
//! means a login redirect, a soft no-op, or a public page.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use plover_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::state::AppState;

/// Authenticated user identity carried inside [`Viewer::Authenticated`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's unique username (from `claims.username`).
    pub username: String,
}

/// Request identity: either a guest or a token-verified user.
///
/// Use this as an extractor parameter in any handler whose behaviour depends
/// on who is asking:
///
/// ```ignore
/// async fn my_handler(viewer: Viewer) -> AppResult<Response> {
///     match viewer.user() {
///         Some(user) => ...,
///         None => Ok(login_redirect("/create")),
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub enum Viewer {
    Anonymous,
    Authenticated(AuthUser),
}

impl Viewer {
    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Authenticated(user) => Some(user),
        }
    }
}

impl FromRequestParts<AppState> for Viewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Ok(Viewer::Anonymous);
        };

        match validate_token(token, &state.config.jwt) {
            Ok(claims) => Ok(Viewer::Authenticated(AuthUser {
                user_id: claims.sub,
                username: claims.username,
            })),
            Err(err) => {
                tracing::debug!(error = %err, "Rejecting bearer token, treating as anonymous");
                Ok(Viewer::Anonymous)
            }
        }
    }
}

//! Submission forms for posts and comments.
//!
//! A form validates externally supplied field values and, on success, hands
//! back a draft that is not yet persisted. Drafts never carry ownership
//! fields; the handler stamps the author (and post, for comments) before the
//! repository saves anything. Group existence is a relational check and is
//! performed by the handler, not here.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Raw `POST /create` / `POST /posts/{id}/edit` submission body.
///
/// Also serializes as the form-prefill payload served by the GET side of
/// those routes.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PostForm {
    pub text: Option<String>,
    pub group: Option<DbId>,
    pub image: Option<String>,
}

/// Validated post fields, ready for the handler to stamp an author onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub text: String,
    pub group_id: Option<DbId>,
    pub image: Option<String>,
}

impl PostForm {
    /// Validate the submitted fields into a [`PostDraft`].
    ///
    /// Text is stripped of surrounding whitespace and must be non-empty.
    pub fn validate(&self) -> Result<PostDraft, String> {
        let text = require_text(self.text.as_deref(), "Post text is required")?;
        Ok(PostDraft {
            text,
            group_id: self.group,
            image: self.image.clone(),
        })
    }
}

/// Raw `POST /posts/{id}/comment` submission body.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CommentForm {
    pub text: Option<String>,
}

/// Validated comment text, ready for the handler to stamp author and post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub text: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<CommentDraft, String> {
        let text = require_text(self.text.as_deref(), "Comment text is required")?;
        Ok(CommentDraft { text })
    }
}

/// Strip whitespace and reject empty values with the given message.
fn require_text(value: Option<&str>, message: &str) -> Result<String, String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(message.to_string()),
    }
}

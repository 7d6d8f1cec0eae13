use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier assigned by the store when a post is created.
pub type PostId = i64;

/// Post entity - a title/body pair with timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for inserting a post. The store assigns `id` and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
}

/// Partial replacement of a post's fields. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }

    /// Apply the supplied fields to `post` and refresh `updated_at`.
    ///
    /// `updated_at` never moves before `created_at`, even if the clock does.
    pub fn apply(self, post: &mut Post, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(body) = self.body {
            post.body = body;
        }
        post.updated_at = now.max(post.created_at);
    }
}

/// Parse a textual identifier (as received in a URL path) into a [`PostId`].
pub fn parse_post_id(raw: &str) -> Result<PostId, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidArgument(
            "post id must not be empty".to_string(),
        ));
    }

    trimmed.parse::<PostId>().map_err(|_| {
        DomainError::InvalidArgument(format!("post id `{raw}` is not a valid integer"))
    })
}

/// Anything the lifecycle service accepts as a post identifier.
pub trait IntoPostId {
    fn into_post_id(self) -> Result<PostId, DomainError>;
}

impl IntoPostId for PostId {
    fn into_post_id(self) -> Result<PostId, DomainError> {
        Ok(self)
    }
}

impl IntoPostId for &str {
    fn into_post_id(self) -> Result<PostId, DomainError> {
        parse_post_id(self)
    }
}

impl IntoPostId for &String {
    fn into_post_id(self) -> Result<PostId, DomainError> {
        parse_post_id(self)
    }
}

impl IntoPostId for String {
    fn into_post_id(self) -> Result<PostId, DomainError> {
        parse_post_id(&self)
    }
}

//! Post lifecycle service.
//!
//! # Responsibility
//! - Validate identifiers and creation input before touching the store.
//! - Default an omitted body to the empty string.
//! - Turn "no row matched" from the repository into a post-specific `NotFound`.
//!
//! # Invariants
//! - Every validation failure is reported before the repository is called.
//! - Update and delete rely on the repository's conditional write for the
//!   existence check; there is no separate read beforehand.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{IntoPostId, NewPost, Post, PostId, PostPatch};
use crate::error::{DomainError, DomainResult, RepoError};
use crate::ports::PostRepository;

/// Acknowledgement returned by a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
}

/// Validates and orchestrates operations on posts.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts, newest first.
    pub async fn get_all(&self) -> DomainResult<Vec<Post>> {
        Ok(self.repo.list_all().await?)
    }

    pub async fn get_by_id(&self, id: impl IntoPostId) -> DomainResult<Post> {
        let id = id.into_post_id()?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    /// Create a post. `title` is required; a missing `body` becomes `""`.
    pub async fn create(&self, title: Option<String>, body: Option<String>) -> DomainResult<Post> {
        let title = require_title(title)?;
        let post = NewPost {
            title,
            body: body.unwrap_or_default(),
        };

        Ok(self.repo.insert(post).await?)
    }

    /// Replace the supplied fields of an existing post.
    pub async fn update(&self, id: impl IntoPostId, patch: PostPatch) -> DomainResult<Post> {
        let id = id.into_post_id()?;
        let patch = PostPatch {
            title: patch.title.map(|t| require_title(Some(t))).transpose()?,
            body: patch.body,
        };

        self.repo
            .replace(id, patch)
            .await
            .map_err(|e| not_found_for(id, e))
    }

    pub async fn delete(&self, id: impl IntoPostId) -> DomainResult<DeleteAck> {
        let id = id.into_post_id()?;
        self.repo
            .remove(id)
            .await
            .map_err(|e| not_found_for(id, e))?;

        Ok(DeleteAck { success: true })
    }
}

fn require_title(title: Option<String>) -> DomainResult<String> {
    match title {
        Some(title) if !title.trim().is_empty() => Ok(title),
        _ => Err(DomainError::InvalidArgument("title is required".to_string())),
    }
}

fn not_found_for(id: PostId, err: RepoError) -> DomainError {
    match err {
        RepoError::NotFound => DomainError::NotFound { id },
        other => DomainError::Persistence(other),
    }
}

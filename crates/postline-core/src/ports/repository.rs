use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, PostPatch};
use crate::error::RepoError;

/// Post repository - the persistence operations the lifecycle service relies on.
///
/// Absence is a normal outcome for reads (`Ok(None)`), but an error for writes:
/// `replace` and `remove` must match and mutate the row in one conditional
/// statement and report [`RepoError::NotFound`] when nothing matched.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Insert a post; the store assigns `id` and sets both timestamps to now.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Apply `patch` to the post with `id` and refresh `updated_at`.
    async fn replace(&self, id: PostId, patch: PostPatch) -> Result<Post, RepoError>;

    /// Delete the post with `id`.
    async fn remove(&self, id: PostId) -> Result<(), RepoError>;
}

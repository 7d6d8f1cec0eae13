//! In-memory post repository - used by tests and when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use postline_core::domain::{NewPost, Post, PostId, PostPatch};
use postline_core::error::RepoError;
use postline_core::ports::PostRepository;

struct Store {
    next_id: PostId,
    posts: BTreeMap<PostId, Post>,
}

/// In-memory post store keyed by id, behind an async RwLock.
///
/// Ids start at 1 and are never reused. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                posts: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.posts.values().cloned().collect();

        // Newest first; ids break ties between posts created in the same instant.
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(posts)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let now = Utc::now();
        let post = Post {
            id,
            title: post.title,
            body: post.body,
            created_at: now,
            updated_at: now,
        };
        store.posts.insert(id, post.clone());

        tracing::debug!(post_id = id, "Inserted post in memory");
        Ok(post)
    }

    async fn replace(&self, id: PostId, patch: PostPatch) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        patch.apply(post, Utc::now());
        Ok(post.clone())
    }

    async fn remove(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            body: String::new(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(new_post("a")).await.unwrap();
        let second = repo.insert(new_post("b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_remove() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(new_post("a")).await.unwrap();
        repo.remove(first.id).await.unwrap();

        let second = repo.insert(new_post("b")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = InMemoryPostRepository::new();
        for title in ["old", "middle", "new"] {
            repo.insert(new_post(title)).await.unwrap();
        }

        let titles: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["new", "middle", "old"]);
    }

    #[tokio::test]
    async fn test_writes_to_missing_post_report_not_found() {
        let repo = InMemoryPostRepository::new();

        assert!(matches!(
            repo.replace(42, PostPatch::default()).await,
            Err(RepoError::NotFound)
        ));
        assert!(matches!(repo.remove(42).await, Err(RepoError::NotFound)));
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }
}

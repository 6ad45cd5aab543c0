//! In-memory post store - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostChanges, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory post store backed by a `Vec` behind an async RwLock.
///
/// Keeps posts in insertion order. Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
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
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        tracing::debug!(post_id = %post.id, total = posts.len(), "Stored post in memory");
        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Post, RepoError> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    async fn update_by_id(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(changes);
        Ok(post.clone())
    }

    async fn delete_by_id(&self, id: PostId) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        posts.remove(index);
        Ok(())
    }
}

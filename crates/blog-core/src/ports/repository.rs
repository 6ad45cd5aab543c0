use async_trait::async_trait;

use crate::domain::{Post, PostChanges, PostId};
use crate::error::RepoError;

/// Post store - the document collection holding every post.
///
/// Each method is a single store operation. Implementations must make each
/// write atomic on its own; no cross-call consistency is promised.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post and return the stored record.
    async fn create(&self, post: Post) -> Result<Post, RepoError>;

    /// Every stored post, in insertion order.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Look up one post. Missing records are `RepoError::NotFound`.
    async fn find_by_id(&self, id: PostId) -> Result<Post, RepoError>;

    /// Replace the supplied fields of a post, leaving `created` untouched.
    async fn update_by_id(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError>;

    /// Permanently remove a post.
    async fn delete_by_id(&self, id: PostId) -> Result<(), RepoError>;
}

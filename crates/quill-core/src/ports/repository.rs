use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::{DomainError, RepoError};

/// Read-only access to the `posts` collection.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Up to `limit` posts in the store's natural order.
    async fn list(&self, limit: usize) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its native identifier.
    async fn find_one(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Find a post by its string-encoded identifier.
    ///
    /// A malformed identifier is reported as not found, with its own message.
    async fn find_by_id(&self, id: &str) -> Result<Post, DomainError> {
        let post_id: PostId = id.parse().map_err(|_| DomainError::InvalidId {
            entity_type: "Post",
            id: id.to_string(),
        })?;

        self.find_one(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity_type: "Post",
                id: id.to_string(),
            })
    }
}

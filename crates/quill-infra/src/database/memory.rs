//! In-memory post repository - a test fixture standing in for the document store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostId};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// In-memory post store kept in insertion order.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    /// Store a post, replacing any existing post with the same ID.
    pub async fn insert(&self, post: Post) -> PostId {
        let id = post.id;
        let mut posts = self.posts.write().await;

        match posts.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => *existing = post,
            None => posts.push(post),
        }

        id
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Post> for InMemoryPostRepository {
    fn from_iter<I: IntoIterator<Item = Post>>(iter: I) -> Self {
        Self {
            posts: RwLock::new(iter.into_iter().collect()),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, limit: usize) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().take(limit).cloned().collect())
    }

    async fn find_one(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }
}

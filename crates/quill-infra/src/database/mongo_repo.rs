//! MongoDB repository implementations.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Collection, Database};

use quill_core::domain::{Post, PostId};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Model as PostModel};

/// MongoDB post repository over the `posts` collection.
#[derive(Clone)]
pub struct MongoPostRepository {
    collection: Collection<PostModel>,
}

impl MongoPostRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(post::COLLECTION),
        }
    }
}

/// Classify a driver error: unreadable documents, unreachable servers, everything else.
pub(crate) fn repo_error(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::BsonDeserialization(_) => RepoError::Decode(err.to_string()),
        ErrorKind::ServerSelection { .. }
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::Io(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

pub(crate) fn id_filter(id: PostId) -> Document {
    doc! { "_id": id.object_id() }
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn list(&self, limit: usize) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(limit, "Listing posts");

        // The driver reads a zero limit as "no limit".
        if limit == 0 {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(doc! {})
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await
            .map_err(repo_error)?;

        let models: Vec<PostModel> = cursor.try_collect().await.map_err(repo_error)?;

        models.into_iter().map(Post::try_from).collect()
    }

    async fn find_one(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post by id");

        let result = self
            .collection
            .find_one(id_filter(id))
            .await
            .map_err(repo_error)?;

        result.map(Post::try_from).transpose()
    }
}

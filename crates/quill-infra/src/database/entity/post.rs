//! Post document as stored in the `posts` collection.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use quill_core::domain::{Comment, Post, PostId};
use quill_core::error::RepoError;

pub const COLLECTION: &str = "posts";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentModel {
    pub body: String,
    pub email: String,
    pub author: String,
}

/// Every field is required; a stored document missing one fails to decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub body: String,
    pub permalink: String,
    pub author: String,
    pub title: String,
    pub tags: Vec<String>,
    pub comments: Vec<CommentModel>,
    pub date: bson::DateTime,
}

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Self {
            body: model.body,
            email: model.email,
            author: model.author,
        }
    }
}

impl From<Comment> for CommentModel {
    fn from(comment: Comment) -> Self {
        Self {
            body: comment.body,
            email: comment.email,
            author: comment.author,
        }
    }
}

/// Conversion from stored document to domain Post.
impl TryFrom<Model> for Post {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let millis = model.date.timestamp_millis();
        let date = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            RepoError::Decode(format!("post {} has out-of-range date {}", model.id, millis))
        })?;

        Ok(Self {
            id: PostId::from(model.id),
            body: model.body,
            permalink: model.permalink,
            author: model.author,
            title: model.title,
            tags: model.tags,
            comments: model.comments.into_iter().map(Into::into).collect(),
            date,
        })
    }
}

/// Conversion from domain Post to stored document.
impl From<Post> for Model {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.object_id(),
            body: post.body,
            permalink: post.permalink,
            author: post.author,
            title: post.title,
            tags: post.tags,
            comments: post.comments.into_iter().map(Into::into).collect(),
            date: bson::DateTime::from_millis(post.date.timestamp_millis()),
        }
    }
}

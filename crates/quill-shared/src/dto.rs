//! Data Transfer Objects - response types for the API.

use serde::{Deserialize, Serialize};

/// A comment as rendered inside a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub body: String,
    pub email: String,
    pub author: String,
}

/// A post as returned by `GET /posts/` and `GET /posts/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    /// 24 lower-case hex characters.
    pub id: String,
    pub body: String,
    pub permalink: String,
    pub author: String,
    pub title: String,
    pub tags: Vec<String>,
    pub comments: Vec<CommentResponse>,
    /// RFC 3339 timestamp.
    pub date: String,
}

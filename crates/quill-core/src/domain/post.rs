use chrono::{DateTime, Utc};

use super::PostId;

/// Comment entity - a reader remark embedded in a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub body: String,
    pub email: String,
    pub author: String,
}

impl Comment {
    pub fn new(body: impl Into<String>, email: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            email: email.into(),
            author: author.into(),
        }
    }
}

/// Post entity - represents a blog post with its embedded comments.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub body: String,
    pub permalink: String,
    pub author: String,
    pub title: String,
    pub tags: Vec<String>,
    pub comments: Vec<Comment>,
    /// Date the post was written.
    pub date: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a generated ID, no tags, no comments, dated now.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author: impl Into<String>,
        permalink: impl Into<String>,
    ) -> Self {
        Self {
            id: PostId::generate(),
            body: body.into(),
            permalink: permalink.into(),
            author: author.into(),
            title: title.into(),
            tags: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    pub fn written_at(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

//! Post handlers.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;

use quill_core::domain::{Comment, Post};
use quill_shared::dto::{CommentResponse, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Maximum number of posts returned by the list endpoint.
pub const LIST_LIMIT: usize = 100;

/// GET /posts/
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list(LIST_LIMIT).await?;
    tracing::debug!(count = posts.len(), "Listed posts");

    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.posts.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        body: post.body,
        permalink: post.permalink,
        author: post.author,
        title: post.title,
        tags: post.tags,
        comments: post.comments.into_iter().map(comment_response).collect(),
        date: post.date.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn comment_response(comment: Comment) -> CommentResponse {
    CommentResponse {
        body: comment.body,
        email: comment.email,
        author: comment.author,
    }
}

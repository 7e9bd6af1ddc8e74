//! Domain entities - the core business objects.

mod post;
mod post_id;

pub use post::{Comment, Post};
pub use post_id::{ParsePostIdError, PostId};

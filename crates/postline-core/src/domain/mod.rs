//! Domain entities - the core business objects.

mod post;

pub use post::{IntoPostId, NewPost, Post, PostId, PostPatch, parse_post_id};

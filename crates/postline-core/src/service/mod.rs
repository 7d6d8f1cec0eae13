//! Use-case services orchestrating the domain over its ports.

mod post_service;

pub use post_service::{DeleteAck, PostService};

//! # Postline Core
//!
//! The domain layer of the Postline posts API.
//! This crate contains the post lifecycle rules with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, DomainResult, RepoError};
pub use service::{DeleteAck, PostService};

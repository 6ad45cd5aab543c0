//! # Blog Core
//!
//! The domain layer of the blog.
//! This crate contains the post model, the store and sanitizer ports, and the
//! service the HTTP layer talks to. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::PostService;

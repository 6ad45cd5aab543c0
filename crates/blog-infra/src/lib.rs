//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post store via SeaORM
//!
//! Build with `--no-default-features` for the in-memory store only.

pub mod database;
pub mod memory;
pub mod sanitize;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;
pub use sanitize::HtmlSanitizer;

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, connect};

#[cfg(test)]
mod tests;

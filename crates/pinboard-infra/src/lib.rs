//! # Pinboard Infrastructure
//!
//! Concrete implementations of the ports defined in `pinboard-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL stores via SeaORM
//! - `minimal` - in-memory stores only, no external dependencies

pub mod database;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryUserRepository, in_memory_repositories};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnection, PostgresPostRepository, PostgresUserRepository};

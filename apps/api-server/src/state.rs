//! Application state - shared across all handlers.

use std::sync::Arc;

use pinboard_core::ports::{PostRepository, UserRepository};
use pinboard_infra::database::{DatabaseConfig, in_memory_repositories};

#[cfg(feature = "postgres")]
use pinboard_infra::database::{DatabaseConnection, PostgresPostRepository, PostgresUserRepository};

/// Shared application state: the two stores behind their port traits.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    /// Which store backs the repositories: "postgres" or "in-memory".
    pub store_mode: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        if let Some(config) = db_config {
            match DatabaseConnection::init(config).await {
                Ok(connection) => {
                    let users = Arc::new(PostgresUserRepository::new(connection.conn.clone()));
                    let posts = Arc::new(PostgresPostRepository::new(connection.conn));
                    return Self {
                        users,
                        posts,
                        store_mode: "postgres",
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    return Self::in_memory();
                }
            }
        }

        #[cfg(not(feature = "postgres"))]
        let _ = db_config;

        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        Self::in_memory()
    }

    /// State over fresh in-memory stores. Also the harness for handler tests.
    pub fn in_memory() -> Self {
        let (users, posts) = in_memory_repositories();
        Self {
            users: Arc::new(users),
            posts: Arc::new(posts),
            store_mode: "in-memory",
        }
    }
}

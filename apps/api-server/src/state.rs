//! Application state - shared across all handlers.

use std::sync::Arc;

use postline_core::PostService;
use postline_core::ports::PostRepository;
use postline_infra::{DatabaseConfig, DatabaseConnections, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use postline_infra::PostgresPostRepository;

/// Which store backs the post service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub storage: StorageBackend,
    pub db: Option<Arc<DatabaseConnections>>,
    /// A database URL was configured, whether or not the connection succeeded.
    pub database_configured: bool,
}

impl AppState {
    /// Build the application state, falling back to in-memory storage when
    /// no database is configured or reachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        if let Some(config) = db_config {
            match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    let conn = Arc::new(connections);
                    let repo = Arc::new(PostgresPostRepository::new(conn.main.clone()));
                    tracing::info!("Application state initialized (postgres)");
                    return Self {
                        posts: PostService::new(repo),
                        storage: StorageBackend::Postgres,
                        db: Some(conn),
                        database_configured: true,
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        {
            tracing::info!("Running without postgres feature - using in-memory repository");
        }

        Self {
            database_configured: db_config.is_some(),
            ..Self::in_memory()
        }
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), StorageBackend::Memory)
    }

    pub fn with_repository(repo: Arc<dyn PostRepository>, storage: StorageBackend) -> Self {
        Self {
            posts: PostService::new(repo),
            storage,
            db: None,
            database_configured: false,
        }
    }
}

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::Result;
use crate::repository::{MemoryRepository, PgRepository, Repository};

/// Handle to the engine's store, cheap to clone and share between requests.
#[derive(Clone)]
pub struct Database {
    repo: Arc<dyn Repository>,
    pool: Option<PgPool>,
}

impl Database {
    /// Connects to Postgres.
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self {
            repo: Arc::new(PgRepository::new(pool.clone())),
            pool: Some(pool),
        })
    }

    /// Store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            repo: Arc::new(MemoryRepository::new()),
            pool: None,
        }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        if let Some(pool) = &self.pool {
            sqlx::migrate!("./migrations").run(pool).await?;
        }
        Ok(())
    }

    pub fn repo(&self) -> &dyn Repository {
        self.repo.as_ref()
    }
}

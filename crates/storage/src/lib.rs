pub mod dto;
pub mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::Result;

#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryStore;
pub use store::ResultStore;

/// Postgres connection pool shared by the repositories.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

//! Database connection and operations

pub mod categories;
pub mod menu_items;
pub mod schema_sync;
pub mod seed;
pub mod sqlite_helpers;

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use categories::{CategoryRecord, CategoryRepository, CreateCategory};
pub use menu_items::{CreateMenuItem, MenuItemRecord, MenuItemRepository};
pub use schema_sync::{SchemaSyncResult, sync_menu_schema};
pub use seed::{SeedResult, run_seeds};

/// Interval between attempts in [Database::connect_with_retry]
const RETRY_INTERVAL: Duration = Duration::from_secs(2);

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database wrapper from an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn connect_options(url: &str) -> Result<SqliteConnectOptions> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL '{}'", url))?
            .create_if_missing(true)
            .foreign_keys(true);
        Ok(options)
    }

    /// Create a new database connection pool, creating the file (and its
    /// parent directory) when missing.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = Self::connect_options(url)?;

        if !url.contains(":memory:")
            && let Some(parent) = options.get_filename().parent()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new database connection pool with retry logic.
    /// Retries every few seconds until `timeout` has elapsed.
    pub async fn connect_with_retry(
        url: &str,
        max_connections: u32,
        timeout: Duration,
    ) -> Result<Self> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            match Self::connect(url, max_connections).await {
                Ok(db) => return Ok(db),
                Err(e) if tokio::time::Instant::now() + RETRY_INTERVAL < deadline => {
                    tracing::warn!(
                        error = %e,
                        retry_in_secs = RETRY_INTERVAL.as_secs(),
                        "Database connection failed, retrying"
                    );
                    tokio::time::sleep(RETRY_INTERVAL).await;
                }
                Err(e) => return Err(e.context("Database connection retries exhausted")),
            }
        }
    }

    /// Single-connection in-memory database with the menu schema applied.
    pub async fn connect_in_memory() -> Result<Self> {
        let db = Self::connect("sqlite::memory:", 1).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get a category repository
    pub fn categories(&self) -> CategoryRepository {
        CategoryRepository::new(self.pool.clone())
    }

    /// Get a menu item repository
    pub fn menu_items(&self) -> MenuItemRepository {
        MenuItemRepository::new(self.pool.clone())
    }

    /// Create missing tables. Fails when any table could not be created.
    pub async fn migrate(&self) -> Result<SchemaSyncResult> {
        let result = sync_menu_schema(&self.pool).await;
        if let Some(first) = result.errors.first() {
            anyhow::bail!("Schema sync failed: {}", first);
        }
        Ok(result)
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

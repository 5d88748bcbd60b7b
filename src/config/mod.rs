//! Application configuration management

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (for generating URLs)
    pub host: Option<String>,

    /// Server port
    pub port: u16,

    /// SQLite database path or URL (`sqlite://...`, `sqlite::memory:`)
    pub database_url: String,

    /// Maximum number of pooled connections
    pub database_max_connections: u32,

    /// How long startup keeps retrying the database before giving up
    pub database_connect_timeout: Duration,

    /// Insert the five required menu categories on boot
    pub seed_default_categories: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Prefer DATABASE_PATH, fall back to DATABASE_URL
        let database_url = lookup("DATABASE_PATH")
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| "./data/restaurante.db".to_string());

        Ok(Self {
            host: lookup("HOST"),

            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("Invalid PORT")?,

            database_url,

            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            database_connect_timeout: Duration::from_secs(
                lookup("DATABASE_CONNECT_TIMEOUT_SECS")
                    .unwrap_or_else(|| "30".to_string())
                    .parse()
                    .context("Invalid DATABASE_CONNECT_TIMEOUT_SECS")?,
            ),

            seed_default_categories: lookup("SEED_DEFAULT_CATEGORIES")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }

    /// Base URL printed in the startup banner
    pub fn public_url(&self) -> String {
        let host = self.host.as_deref().unwrap_or("localhost");
        format!("http://{}:{}", host, self.port)
    }
}

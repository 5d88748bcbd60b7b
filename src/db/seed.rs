//! Pre-seed data for initial database setup.
//!
//! Inserts the five menu categories the catalog seeder requires. Uses
//! INSERT OR IGNORE on the unique category name so re-runs are idempotent
//! (existing rows, including deactivated ones, are preserved).

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::services::catalog::RequiredCategory;

/// Result of running seed operations.
#[derive(Debug, Default)]
pub struct SeedResult {
    pub tables_seeded: Vec<String>,
    pub errors: Vec<String>,
}

/// Seed the default menu categories.
async fn seed_categories(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut inserted = 0u64;
    for category in RequiredCategory::ALL {
        let r = sqlx::query(
            r#"INSERT OR IGNORE INTO categories (name, description, kind, active) VALUES (?, ?, ?, 1)"#,
        )
        .bind(category.display_name())
        .bind(category.description())
        .bind(category.kind())
        .execute(pool)
        .await?;

        if r.rows_affected() > 0 {
            inserted += 1;
        }
    }

    Ok(inserted)
}

/// Run all seed routines. Safe to call multiple times (uses INSERT OR IGNORE).
pub async fn run_seeds(pool: &SqlitePool) -> SeedResult {
    let mut result = SeedResult::default();

    for (table, count) in [("categories", seed_categories(pool).await)] {
        match count {
            Ok(n) => {
                if n > 0 {
                    debug!(table = table, count = n, "Seeded table");
                    result.tables_seeded.push(format!("{} ({} rows)", table, n));
                }
            }
            Err(e) => {
                let msg = format!("Seed {}: {}", table, e);
                warn!("{}", msg);
                result.errors.push(msg);
            }
        }
    }

    if !result.tables_seeded.is_empty() {
        info!(tables = ?result.tables_seeded, "Pre-seed data applied");
    }

    result
}

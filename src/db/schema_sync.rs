//! Schema bootstrap for the menu tables
//!
//! Creates `categories` and `menu_items` when they are missing. Existing
//! tables are left untouched: no column additions, renames or type changes.

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

pub use crate::db::seed::run_seeds;

/// Result of a schema sync operation
#[derive(Debug, Default)]
pub struct SchemaSyncResult {
    pub tables_created: Vec<String>,
    pub errors: Vec<String>,
}

/// Table name and its CREATE statement, in dependency order.
const TABLES: &[(&str, &str)] = &[
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            kind TEXT NOT NULL DEFAULT 'COMIDA',
            active BOOLEAN NOT NULL DEFAULT 1
        )
        "#,
    ),
    (
        "menu_items",
        r#"
        CREATE TABLE IF NOT EXISTS menu_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            price TEXT NOT NULL,
            category_id INTEGER NOT NULL REFERENCES categories(id),
            image_url TEXT,
            preparation_minutes INTEGER,
            active BOOLEAN NOT NULL DEFAULT 1,
            delivery_available BOOLEAN NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        )
        "#,
    ),
];

/// Check if a table exists in the database
async fn table_exists(pool: &SqlitePool, table_name: &str) -> Result<bool, sqlx::Error> {
    let result: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = ?")
            .bind(table_name)
            .fetch_optional(pool)
            .await?;

    Ok(result.is_some())
}

/// Create every missing menu table. Safe to call on each startup.
pub async fn sync_menu_schema(pool: &SqlitePool) -> SchemaSyncResult {
    let mut result = SchemaSyncResult::default();

    for (table_name, create_sql) in TABLES {
        let existed = match table_exists(pool, table_name).await {
            Ok(existed) => existed,
            Err(e) => {
                let msg = format!("Failed to inspect table {}: {}", table_name, e);
                warn!("{}", msg);
                result.errors.push(msg);
                continue;
            }
        };

        if existed {
            debug!(table = *table_name, "Table already present");
            continue;
        }

        match sqlx::query(create_sql.trim()).execute(pool).await {
            Ok(_) => {
                info!("Created table: {}", table_name);
                result.tables_created.push(table_name.to_string());
            }
            Err(e) => {
                let msg = format!("Failed to create table {}: {}", table_name, e);
                warn!("{}", msg);
                result.errors.push(msg);
            }
        }
    }

    result
}

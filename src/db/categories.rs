//! Menu category repository

use anyhow::Result;
use serde::Serialize;
use sqlx::SqlitePool;

/// Category record from database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryRecord {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "activa")]
    pub active: bool,
}

/// Input for creating a category
#[derive(Debug)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub kind: String,
    pub active: bool,
}

pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all active categories, ordered by name
    pub async fn list_active(&self) -> Result<Vec<CategoryRecord>> {
        let records = sqlx::query_as::<_, CategoryRecord>(
            r#"
            SELECT id, name, description, kind, active
            FROM categories
            WHERE active = 1
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Get a category by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<CategoryRecord>> {
        let record = sqlx::query_as::<_, CategoryRecord>(
            r#"
            SELECT id, name, description, kind, active
            FROM categories
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Create a new category
    pub async fn create(&self, input: CreateCategory) -> Result<CategoryRecord> {
        let record = sqlx::query_as::<_, CategoryRecord>(
            r#"
            INSERT INTO categories (name, description, kind, active)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, description, kind, active
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.kind)
        .bind(input.active)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Set the active flag. Returns false when no such row exists.
    pub async fn set_active(&self, id: i64, active: bool) -> Result<bool> {
        let result = sqlx::query("UPDATE categories SET active = ? WHERE id = ?")
            .bind(active)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

//! Menu item (plato) database repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::SqlitePool;

use super::sqlite_helpers::{decimal_to_str, now_iso8601, str_to_datetime, str_to_decimal};

/// Raw menu_items row as SQLite returns it (price and timestamp as TEXT)
#[derive(Debug, sqlx::FromRow)]
struct MenuItemRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: String,
    category_id: i64,
    image_url: Option<String>,
    preparation_minutes: Option<i32>,
    active: bool,
    delivery_available: bool,
    created_at: String,
}

/// Menu item record from database
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemRecord {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "categoriaId")]
    pub category_id: i64,
    #[serde(rename = "imagenUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "tiempoPreparacion")]
    pub preparation_minutes: Option<i32>,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "disponibleDomicilio")]
    pub delivery_available: bool,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

impl TryFrom<MenuItemRow> for MenuItemRecord {
    type Error = anyhow::Error;

    fn try_from(row: MenuItemRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: str_to_decimal(&row.price)?,
            category_id: row.category_id,
            image_url: row.image_url,
            preparation_minutes: row.preparation_minutes,
            active: row.active,
            delivery_available: row.delivery_available,
            created_at: str_to_datetime(&row.created_at)?,
        })
    }
}

/// Input for creating a menu item
#[derive(Debug, Clone)]
pub struct CreateMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: i64,
    pub image_url: Option<String>,
    pub preparation_minutes: Option<i32>,
    pub active: bool,
    pub delivery_available: bool,
}

const MENU_ITEM_COLUMNS: &str = "id, name, description, price, category_id, image_url, \
     preparation_minutes, active, delivery_available, created_at";

pub struct MenuItemRepository {
    pool: SqlitePool,
}

impl MenuItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Check whether a menu item with this exact name exists
    pub async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM menu_items WHERE name = ?)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists != 0)
    }

    /// Create a new menu item
    pub async fn create(&self, input: CreateMenuItem) -> Result<MenuItemRecord> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            r#"
            INSERT INTO menu_items (
                name, description, price, category_id, image_url,
                preparation_minutes, active, delivery_available, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {MENU_ITEM_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(decimal_to_str(input.price))
        .bind(input.category_id)
        .bind(&input.image_url)
        .bind(input.preparation_minutes)
        .bind(input.active)
        .bind(input.delivery_available)
        .bind(now_iso8601())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(menu_item_id = row.id, name = %row.name, "Menu item created");

        row.try_into()
    }

    /// Get a menu item by name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<MenuItemRecord>> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "SELECT {MENU_ITEM_COLUMNS} FROM menu_items WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(MenuItemRecord::try_from).transpose()
    }

    /// List menu items, optionally restricted to one category
    pub async fn list(&self, category_id: Option<i64>) -> Result<Vec<MenuItemRecord>> {
        let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
            r#"
            SELECT {MENU_ITEM_COLUMNS}
            FROM menu_items
            WHERE ? IS NULL OR category_id = ?
            ORDER BY category_id, name
            "#
        ))
        .bind(category_id)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(MenuItemRecord::try_from).collect()
    }

    /// Count all menu items
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

//! Menu catalog seeder.
//!
//! Resolves the five required categories by name, then inserts every dish of
//! the static [MENU](crate::services::catalog::MENU) whose name is not taken
//! yet. Existing rows are never updated. A failing dish is logged and skipped;
//! the rest of the batch still runs.
//!
//! Two concurrent runs are not serialized: both may pass the existence check
//! for the same name, in which case the unique constraint rejects the second
//! insert and it is counted as a failure.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::db::{
    CategoryRecord, CategoryRepository, CreateMenuItem, MenuItemRecord, MenuItemRepository,
};
use crate::services::catalog::{MENU, MenuItemSeed, RequiredCategory};

/// Source of active categories
#[async_trait]
pub trait CategoryLookup: Send + Sync {
    async fn find_all_active(&self) -> Result<Vec<CategoryRecord>>;
}

/// Destination for seeded menu items
#[async_trait]
pub trait MenuItemStore: Send + Sync {
    async fn exists_by_name(&self, name: &str) -> Result<bool>;
    async fn save(&self, item: CreateMenuItem) -> Result<MenuItemRecord>;
}

#[async_trait]
impl CategoryLookup for CategoryRepository {
    async fn find_all_active(&self) -> Result<Vec<CategoryRecord>> {
        self.list_active().await
    }
}

#[async_trait]
impl MenuItemStore for MenuItemRepository {
    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        MenuItemRepository::exists_by_name(self, name).await
    }

    async fn save(&self, item: CreateMenuItem) -> Result<MenuItemRecord> {
        self.create(item).await
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error(
        "Faltan categorías. Asegúrate de que existan: Entradas, Platos Principales, Postres, Bebidas Frías, Bebidas Calientes"
    )]
    MissingCategories { missing: Vec<RequiredCategory> },

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Outcome of a single insert attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyExists,
    Failed,
}

/// Counts for one seeder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: u32,
    pub existing: u32,
    pub failed: u32,
}

impl SeedReport {
    fn record(&mut self, outcome: InsertOutcome) {
        match outcome {
            InsertOutcome::Inserted => self.inserted += 1,
            InsertOutcome::AlreadyExists => self.existing += 1,
            InsertOutcome::Failed => self.failed += 1,
        }
    }

    /// Human readable summary returned to the caller
    pub fn message(&self) -> String {
        let mut message = format!("Se insertaron {} platos exitosamente.", self.inserted);
        if self.existing > 0 {
            message.push_str(&format!(" {} platos ya existían.", self.existing));
        }
        message
    }
}

/// Category ids for the five required categories
#[derive(Debug, Clone)]
pub struct CategoryIds(HashMap<RequiredCategory, i64>);

impl CategoryIds {
    /// Case-insensitive match of active categories against the required names.
    pub fn resolve(categories: &[CategoryRecord]) -> Result<Self, SeedError> {
        let by_name: HashMap<String, i64> = categories
            .iter()
            .map(|c| (c.name.to_lowercase(), c.id))
            .collect();

        let mut ids = HashMap::new();
        let mut missing = Vec::new();
        for category in RequiredCategory::ALL {
            match by_name.get(category.lookup_key()) {
                Some(id) => {
                    ids.insert(category, *id);
                }
                None => missing.push(category),
            }
        }

        if missing.is_empty() {
            Ok(Self(ids))
        } else {
            Err(SeedError::MissingCategories { missing })
        }
    }

    pub fn get(&self, category: RequiredCategory) -> Option<i64> {
        self.0.get(&category).copied()
    }
}

pub struct MenuSeeder<C, M> {
    categories: C,
    items: M,
}

impl<C: CategoryLookup, M: MenuItemStore> MenuSeeder<C, M> {
    pub fn new(categories: C, items: M) -> Self {
        Self { categories, items }
    }

    /// Seed the whole catalog.
    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        self.run_with(MENU).await
    }

    /// Seed an explicit list of dishes.
    pub async fn run_with(&self, seeds: &[MenuItemSeed]) -> Result<SeedReport, SeedError> {
        let categories = self.categories.find_all_active().await?;
        let ids = match CategoryIds::resolve(&categories) {
            Ok(ids) => ids,
            Err(e) => {
                if let SeedError::MissingCategories { missing } = &e {
                    let names: Vec<&str> = missing.iter().map(|c| c.display_name()).collect();
                    warn!(missing = ?names, "Required menu categories missing, nothing inserted");
                }
                return Err(e);
            }
        };

        let mut report = SeedReport::default();
        for seed in seeds {
            let outcome = self.insert_if_absent(seed, &ids).await;
            report.record(outcome);
        }

        info!(
            inserted = report.inserted,
            existing = report.existing,
            failed = report.failed,
            "Menu catalog seeded"
        );

        Ok(report)
    }

    async fn insert_if_absent(&self, seed: &MenuItemSeed, ids: &CategoryIds) -> InsertOutcome {
        match self.try_insert(seed, ids).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(name = seed.name, error = %e, "Failed to insert menu item");
                InsertOutcome::Failed
            }
        }
    }

    async fn try_insert(&self, seed: &MenuItemSeed, ids: &CategoryIds) -> Result<InsertOutcome> {
        if self.items.exists_by_name(seed.name).await? {
            debug!(name = seed.name, "Menu item already exists, skipping");
            return Ok(InsertOutcome::AlreadyExists);
        }

        let category_id = ids
            .get(seed.category)
            .ok_or_else(|| anyhow::anyhow!("No id for category {}", seed.category.display_name()))?;

        self.items
            .save(CreateMenuItem {
                name: seed.name.to_string(),
                description: Some(seed.description.to_string()),
                price: seed.price(),
                category_id,
                image_url: Some(seed.image_url.to_string()),
                preparation_minutes: Some(seed.preparation_minutes),
                active: true,
                delivery_available: true,
            })
            .await?;

        Ok(InsertOutcome::Inserted)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::db::{CreateCategory, Database};

    async fn seeded_categories(db: &Database, skip: Option<RequiredCategory>) {
        for category in RequiredCategory::ALL {
            if Some(category) == skip {
                continue;
            }
            db.categories()
                .create(CreateCategory {
                    name: category.display_name().to_string(),
                    description: None,
                    kind: category.kind().to_string(),
                    active: true,
                })
                .await
                .unwrap();
        }
    }

    /// Store that rejects one chosen name and delegates everything else.
    struct FailingStore {
        inner: MenuItemRepository,
        fail_on: &'static str,
    }

    #[async_trait]
    impl MenuItemStore for FailingStore {
        async fn exists_by_name(&self, name: &str) -> Result<bool> {
            self.inner.exists_by_name(name).await
        }

        async fn save(&self, item: CreateMenuItem) -> Result<MenuItemRecord> {
            if item.name == self.fail_on {
                anyhow::bail!("simulated write failure for {}", item.name);
            }
            self.inner.create(item).await
        }
    }

    struct BrokenLookup;

    #[async_trait]
    impl CategoryLookup for BrokenLookup {
        async fn find_all_active(&self) -> Result<Vec<CategoryRecord>> {
            anyhow::bail!("connection reset")
        }
    }

    fn record(id: i64, name: &str) -> CategoryRecord {
        CategoryRecord {
            id,
            name: name.to_string(),
            description: None,
            kind: "COMIDA".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let categories = vec![
            record(1, "ENTRADAS"),
            record(2, "platos principales"),
            record(3, "Postres"),
            record(4, "BEBIDAS FRÍAS"),
            record(5, "Bebidas Calientes"),
        ];
        let ids = CategoryIds::resolve(&categories).unwrap();
        assert_eq!(ids.get(RequiredCategory::Starters), Some(1));
        assert_eq!(ids.get(RequiredCategory::ColdDrinks), Some(4));
        assert_eq!(ids.get(RequiredCategory::HotDrinks), Some(5));
    }

    #[test]
    fn test_resolve_reports_missing() {
        let categories = vec![record(1, "Entradas"), record(3, "Postres")];
        let err = CategoryIds::resolve(&categories).unwrap_err();
        assert_matches!(err, SeedError::MissingCategories { ref missing } => {
            assert_eq!(
                missing,
                &vec![
                    RequiredCategory::MainCourses,
                    RequiredCategory::ColdDrinks,
                    RequiredCategory::HotDrinks,
                ]
            );
        });
        assert!(err.to_string().starts_with("Faltan categorías."));
    }

    #[test]
    fn test_report_message() {
        let mut report = SeedReport::default();
        assert_eq!(report.message(), "Se insertaron 0 platos exitosamente.");
        report.record(InsertOutcome::Inserted);
        report.record(InsertOutcome::AlreadyExists);
        report.record(InsertOutcome::Failed);
        assert_eq!(
            report.message(),
            "Se insertaron 1 platos exitosamente. 1 platos ya existían."
        );
    }

    #[tokio::test]
    async fn test_first_run_inserts_whole_catalog() {
        let db = Database::connect_in_memory().await.unwrap();
        seeded_categories(&db, None).await;

        let seeder = MenuSeeder::new(db.categories(), db.menu_items());
        let report = seeder.run().await.unwrap();

        assert_eq!(
            report,
            SeedReport {
                inserted: MENU.len() as u32,
                existing: 0,
                failed: 0,
            }
        );
        assert_eq!(db.menu_items().count().await.unwrap(), MENU.len() as i64);
    }

    #[tokio::test]
    async fn test_second_run_inserts_nothing() {
        let db = Database::connect_in_memory().await.unwrap();
        seeded_categories(&db, None).await;
        let seeder = MenuSeeder::new(db.categories(), db.menu_items());

        assert_eq!(seeder.run().await.unwrap().inserted, 40);
        let second = seeder.run().await.unwrap();
        assert_eq!(second.inserted, 0);
        assert_eq!(second.existing, 40);
        assert_eq!(db.menu_items().count().await.unwrap(), 40);
    }

    #[tokio::test]
    async fn test_existing_row_is_not_updated() {
        let db = Database::connect_in_memory().await.unwrap();
        seeded_categories(&db, None).await;
        let ids = CategoryIds::resolve(&db.categories().list_active().await.unwrap()).unwrap();

        db.menu_items()
            .create(CreateMenuItem {
                name: "Limonada".to_string(),
                description: None,
                price: crate::db::sqlite_helpers::cents_to_decimal(999),
                category_id: ids.get(RequiredCategory::ColdDrinks).unwrap(),
                image_url: None,
                preparation_minutes: None,
                active: false,
                delivery_available: false,
            })
            .await
            .unwrap();

        let report = MenuSeeder::new(db.categories(), db.menu_items())
            .run()
            .await
            .unwrap();
        assert_eq!(report.inserted, 39);
        assert_eq!(report.existing, 1);

        let limonada = db.menu_items().get_by_name("Limonada").await.unwrap().unwrap();
        assert_eq!(limonada.price.to_string(), "9.99");
        assert!(!limonada.active);
        assert!(limonada.description.is_none());
    }

    #[tokio::test]
    async fn test_missing_category_inserts_nothing() {
        for skip in RequiredCategory::ALL {
            let db = Database::connect_in_memory().await.unwrap();
            seeded_categories(&db, Some(skip)).await;

            let result = MenuSeeder::new(db.categories(), db.menu_items()).run().await;
            assert_matches!(result, Err(SeedError::MissingCategories { ref missing }) if missing == &vec![skip]);
            assert_eq!(db.menu_items().count().await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn test_inactive_category_counts_as_missing() {
        let db = Database::connect_in_memory().await.unwrap();
        seeded_categories(&db, None).await;
        let postres = db
            .categories()
            .list_active()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Postres")
            .unwrap();
        db.categories().set_active(postres.id, false).await.unwrap();

        let result = MenuSeeder::new(db.categories(), db.menu_items()).run().await;
        assert_matches!(result, Err(SeedError::MissingCategories { .. }));
        assert_eq!(db.menu_items().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_single_failure_does_not_stop_batch() {
        let db = Database::connect_in_memory().await.unwrap();
        seeded_categories(&db, None).await;
        let store = FailingStore {
            inner: db.menu_items(),
            fail_on: "Pollo a la Brasa",
        };

        let report = MenuSeeder::new(db.categories(), store).run().await.unwrap();
        assert_eq!(report.inserted, 39);
        assert_eq!(report.failed, 1);

        let repo = db.menu_items();
        assert!(!repo.exists_by_name("Pollo a la Brasa").await.unwrap());
        // Dishes listed after the failing one were still inserted
        assert!(repo.exists_by_name("Té de Coca").await.unwrap());
    }

    #[tokio::test]
    async fn test_reported_count_matches_persisted_rows() {
        let db = Database::connect_in_memory().await.unwrap();
        seeded_categories(&db, None).await;
        let store = FailingStore {
            inner: db.menu_items(),
            fail_on: "Tres Leches",
        };

        let report = MenuSeeder::new(db.categories(), store).run().await.unwrap();

        let repo = db.menu_items();
        let mut present = 0;
        for seed in MENU {
            if repo.exists_by_name(seed.name).await.unwrap() {
                present += 1;
            }
        }
        assert_eq!(report.inserted, present);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_unexpected() {
        let db = Database::connect_in_memory().await.unwrap();
        let result = MenuSeeder::new(BrokenLookup, db.menu_items()).run().await;

        assert_matches!(result, Err(SeedError::Unexpected(_)));
        assert_eq!(result.unwrap_err().to_string(), "connection reset");
    }

    #[tokio::test]
    async fn test_seeded_fields() {
        let db = Database::connect_in_memory().await.unwrap();
        seeded_categories(&db, None).await;
        MenuSeeder::new(db.categories(), db.menu_items())
            .run()
            .await
            .unwrap();

        let lomo = db.menu_items().get_by_name("Lomo Saltado").await.unwrap().unwrap();
        let principales = db
            .categories()
            .list_active()
            .await
            .unwrap()
            .into_iter()
            .find(|c| c.name == "Platos Principales")
            .unwrap();
        assert_eq!(lomo.category_id, principales.id);
        assert_eq!(lomo.price.to_string(), "32.00");
        assert_eq!(lomo.preparation_minutes, Some(25));
        assert_eq!(lomo.image_url.as_deref(), Some("/assets/images/platos/lomo-saltado.jpg"));
        assert!(lomo.active);
        assert!(lomo.delivery_available);
    }
}

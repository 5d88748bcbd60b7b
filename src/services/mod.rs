//! Domain services

pub mod catalog;
pub mod menu_seeder;

pub use catalog::{MENU, MenuItemSeed, RequiredCategory};
pub use menu_seeder::{
    CategoryIds, CategoryLookup, InsertOutcome, MenuItemStore, MenuSeeder, SeedError, SeedReport,
};

//! Restaurante backend - menu catalog service
//!
//! Seeds the restaurant menu through `POST /api/admin/data/insertar-platos`
//! and exposes read-only category and menu listings.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod db;
pub mod services;

pub use app::{AppState, build_app};
pub use config::Config;
pub use db::Database;

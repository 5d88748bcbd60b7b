//! Administrative data endpoints

use axum::{Json, Router, extract::State, routing::post};
use serde::Serialize;

use crate::app::AppState;
use crate::services::{MenuSeeder, SeedError, SeedReport};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertMenuResponse {
    pub success: bool,
    pub platos_insertados: u32,
    pub platos_existentes: u32,
    pub mensaje: String,
}

impl From<SeedReport> for InsertMenuResponse {
    fn from(report: SeedReport) -> Self {
        Self {
            success: true,
            platos_insertados: report.inserted,
            platos_existentes: report.existing,
            mensaje: report.message(),
        }
    }
}

/// Insert every catalog dish that does not exist yet
async fn insert_menu_items(
    State(state): State<AppState>,
) -> Result<Json<InsertMenuResponse>, SeedError> {
    let seeder = MenuSeeder::new(state.db.categories(), state.db.menu_items());
    let report = seeder.run().await?;
    Ok(Json(report.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/insertar-platos", post(insert_menu_items))
}

//! Read-only menu endpoints

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use super::error::ApiError;
use crate::app::AppState;
use crate::db::{CategoryRecord, MenuItemRecord};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemsQuery {
    pub categoria_id: Option<i64>,
}

/// List active categories
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryRecord>>, ApiError> {
    let categories = state.db.categories().list_active().await?;
    Ok(Json(categories))
}

/// List menu items, optionally for a single category
async fn list_menu_items(
    State(state): State<AppState>,
    Query(query): Query<MenuItemsQuery>,
) -> Result<Json<Vec<MenuItemRecord>>, ApiError> {
    if let Some(id) = query.categoria_id
        && state.db.categories().get_by_id(id).await?.is_none()
    {
        return Err(ApiError::BadRequest(format!("Categoría {} no existe", id)));
    }

    let items = state.db.menu_items().list(query.categoria_id).await?;
    Ok(Json(items))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categorias", get(list_categories))
        .route("/platos", get(list_menu_items))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::app::{AppState, build_app};
    use crate::config::Config;
    use crate::db::{Database, run_seeds};
    use crate::services::MenuSeeder;

    async fn seeded_app() -> axum::Router {
        let db = Database::connect_in_memory().await.unwrap();
        run_seeds(db.pool()).await;
        MenuSeeder::new(db.categories(), db.menu_items())
            .run()
            .await
            .unwrap();
        build_app(AppState {
            config: Arc::new(Config::from_lookup(|_| None).unwrap()),
            db,
        })
    }

    async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_list_categories() {
        let app = seeded_app().await;
        let (status, body) = get_json(&app, "/api/categorias").await;
        assert_eq!(status, StatusCode::OK);

        let categories = body.as_array().unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0]["nombre"], "Bebidas Calientes");
        assert_eq!(categories[0]["tipo"], "BEBIDA");
        assert_eq!(categories[0]["activa"], true);
    }

    #[tokio::test]
    async fn test_list_menu_items_by_category() {
        let app = seeded_app().await;

        let (_, all) = get_json(&app, "/api/platos").await;
        assert_eq!(all.as_array().unwrap().len(), 40);

        let (_, categories) = get_json(&app, "/api/categorias").await;
        let postres_id = categories
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["nombre"] == "Postres")
            .and_then(|c| c["id"].as_i64())
            .unwrap();

        let (status, postres) = get_json(&app, &format!("/api/platos?categoriaId={}", postres_id)).await;
        assert_eq!(status, StatusCode::OK);
        let postres = postres.as_array().unwrap();
        assert_eq!(postres.len(), 7);
        let picarones = postres.iter().find(|p| p["nombre"] == "Picarones").unwrap();
        assert_eq!(picarones["precio"], "11.00");
        assert_eq!(picarones["tiempoPreparacion"], 20);
        assert_eq!(picarones["disponibleDomicilio"], true);
    }

    #[tokio::test]
    async fn test_unknown_category_is_bad_request() {
        let app = seeded_app().await;
        let (status, body) = get_json(&app, "/api/platos?categoriaId=9999").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Categoría 9999 no existe");
    }
}

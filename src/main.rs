//! Restaurante Backend - menu catalog service
//!
//! This is the main entry point for the backend API.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use restaurante_backend::cli::{CliOptions, RunMode};
use restaurante_backend::db::run_seeds;
use restaurante_backend::services::MenuSeeder;
use restaurante_backend::{AppState, Config, Database, build_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let options = CliOptions::from_args();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restaurante_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting Restaurante Backend");

    let config = Arc::new(Config::from_env()?);
    tracing::info!("Configuration loaded");

    let db = Database::connect_with_retry(
        &config.database_url,
        config.database_max_connections,
        config.database_connect_timeout,
    )
    .await?;
    tracing::info!(database = %config.database_url, "Database connected");

    let sync = db.migrate().await?;
    if !sync.tables_created.is_empty() {
        tracing::info!(tables = ?sync.tables_created, "Created tables");
    }

    if config.seed_default_categories {
        let seeds = run_seeds(db.pool()).await;
        for err in &seeds.errors {
            tracing::warn!(error = %err, "Seed error");
        }
    }

    if options.run_mode == RunMode::SeedOnly {
        let seeder = MenuSeeder::new(db.categories(), db.menu_items());
        let result = seeder.run().await;
        db.close().await;
        let report = result?;
        tracing::info!(message = %report.message(), "Seed-only run finished");
        return Ok(());
    }

    let state = AppState {
        config: config.clone(),
        db,
    };
    let app = build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);
    tracing::info!(
        "Seed endpoint: POST {}/api/admin/data/insertar-platos",
        config.public_url()
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

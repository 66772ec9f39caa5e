use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use models::db::DatabaseConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the store and apply migrations when configured to.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let db = models::db::connect_with_config(&DatabaseConfig::from_settings(&cfg.database)).await?;
    if cfg.database.auto_migrate {
        models::db::migrate(&db).await?;
    }
    Ok(AppState::new(db))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    // config.toml when present, environment variables otherwise
    let cfg = AppConfig::load_or_env()?;
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "starting pizza restaurants api");
    axum::serve(listener, app).await?;
    Ok(())
}

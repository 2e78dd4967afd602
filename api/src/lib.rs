mod config;
mod error;
mod handlers;

use axum::{Router, routing::get};
use migration::{Migrator, MigratorTrait};
use pizza_store_service::sea_orm::{Database, DatabaseConnection};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub use config::Config;
pub use error::{ApiError, ApiErrorBody, ApiResult};

const DEFAULT_LOG_FILTER: &str = "info,sea_orm=info,pizza_store_api=debug";

#[derive(Clone)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

/// The HTTP surface: `/`, `/pizzas`, `/pizzas/{id}` and `/ingredients`.
pub fn router(conn: DatabaseConnection) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/pizzas", get(handlers::list_pizzas))
        .route("/pizzas/{id}", get(handlers::get_pizza))
        .route("/ingredients", get(handlers::list_ingredients))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { conn })
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;
    let conn = Database::connect(config.database_url.as_str()).await?;
    Migrator::up(&conn, None).await?;

    let listener = tokio::net::TcpListener::bind(config.server_url()).await?;
    tracing::info!(address = %config.server_url(), "pizza store listening");
    axum::serve(listener, router(conn)).await?;

    Ok(())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        eprintln!("Error: {err}");
    }
}

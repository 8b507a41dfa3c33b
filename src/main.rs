use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use envconfig::Envconfig;

pub mod db;
pub mod error;
pub mod handlers;
pub mod services;
pub mod templates;
pub mod utils;

#[cfg(test)]
mod testing;

use db::PgStore;
use handlers::AppState;
use services::FmsClient;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[derive(Envconfig)]
pub struct Config {
    #[envconfig(from = "DATABASE_URL")]
    database_url: String,

    #[envconfig(from = "DB_MAX_CONNECTIONS", default = "5")]
    db_max_connections: u32,

    #[envconfig(from = "BIND_ADDRESS", default = "127.0.0.1:5000")]
    bind_address: String,

    #[envconfig(
        from = "FMS_API_URL",
        default = "http://127.0.0.1:7000/api/lms_purchase"
    )]
    fms_api_url: String,

    /// Unset means billing calls wait as long as the connection allows.
    #[envconfig(from = "FMS_TIMEOUT_SECS")]
    fms_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize the logger with default settings or "info" level if not specified
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    log::info!("Starting the pharmacy service...");

    dotenv().ok();
    let config = Config::init_from_env()?;

    let pool = db::init_db(&config.database_url, config.db_max_connections).await?;
    let store = Arc::new(PgStore::new(pool.clone()));

    let fms = FmsClient::new(
        config.fms_api_url.clone(),
        config.fms_timeout_secs.map(Duration::from_secs),
    )?;
    log::info!("Billing records go to {}", fms.url());

    let app = handlers::router(AppState::new(store, Arc::new(fms)));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    log::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    log::info!("Shutting down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

//! Quran Tracker server binary.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quran_tracker::adapters::http::{api_router, ReaderAppState};
use quran_tracker::adapters::sqlite;
use quran_tracker::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.server.log_level))?,
        )
        .init();

    info!("Quran tracker starting");

    let pool = sqlite::open(&config.database).await?;
    let app = api_router(ReaderAppState::sqlite(pool));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("Server running on port {}", config.server.port);

    axum::serve(listener, app).await?;

    Ok(())
}

//! Server binary for the benefits cost engine.

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use benefits_engine::api::{AppState, create_router};
use benefits_engine::config::BenefitRates;
use benefits_engine::store::InMemoryStore;

const DEFAULT_RATES_PATH: &str = "./config/benefits/rates.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let rates_path =
        std::env::var("BENEFITS_RATES_PATH").unwrap_or_else(|_| DEFAULT_RATES_PATH.to_string());
    let rates = BenefitRates::load(&rates_path)?;
    info!(path = %rates_path, "Loaded benefit rate table");

    let state = AppState::with_store(rates, InMemoryStore::seeded());
    let router = create_router(state);

    let addr: SocketAddr = std::env::var("BENEFITS_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Benefits engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}

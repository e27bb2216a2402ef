//! Kuntur Daemon - case management API for the UPC alert system
//!
//! Accepts case reports (victim, agent, alarm correlation) and exposes
//! listing, lookup and update over HTTP.

use anyhow::Result;
use kuntur_common::{CaseRepository, JsonFileStore, KunturConfig};
use kunturd::server::{self, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Kuntur Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = KunturConfig::load();
    let repo = CaseRepository::open(JsonFileStore::new(&config.data_file));

    server::run(&config, AppState::new(repo)).await
}

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tripcraft::config::TripCraftConfig;
use tripcraft::planner::PlannerService;
use tripcraft::provider::GeminiClient;
use tripcraft::web;

#[tokio::main]
async fn main() -> Result<()> {
    // Fail fast: a missing credential aborts startup, not the first request.
    let config = TripCraftConfig::load().with_context(|| "Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    tracing::info!(
        "Starting TripCraft v{} (model: {})",
        tripcraft::VERSION,
        config.provider.model
    );

    let provider = GeminiClient::new(config.provider.clone())
        .with_context(|| "Failed to create completion client")?;
    let service = Arc::new(PlannerService::new(Arc::new(provider)));

    web::run(config.server.port, service).await
}

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tempcast::api::AppState;
use tempcast::predictor::{ArtifactModel, ensure_artifact};
use tempcast::service::PredictionService;
use tempcast::{TempcastConfig, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TempcastConfig::load()?;
    init_logging(&config)?;

    info!("tempcast {} starting", tempcast::VERSION);

    // The model is constructed exactly once here and injected everywhere
    // else by reference; a failure at this point terminates the process.
    let artifact_path = ensure_artifact(&config.model).await?;
    let model = ArtifactModel::load(&artifact_path).with_context(|| {
        format!(
            "Failed to load model artifact from {}",
            artifact_path.display()
        )
    })?;

    let state = AppState {
        service: Arc::new(PredictionService::new(Arc::new(model))),
    };
    web::run(config.server.port, state).await
}

fn init_logging(config: &TempcastConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .with_context(|| "Invalid log filter")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

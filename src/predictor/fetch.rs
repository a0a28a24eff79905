//! Model artifact acquisition
//!
//! Resolves the artifact to a local file: the configured path wins if it
//! exists, otherwise the artifact is downloaded from the configured remote
//! URL with bounded retries and stored at that path. Runs once at startup;
//! a failure here terminates the process.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::config::ModelConfig;
use crate::error::TempcastError;

/// Make sure the model artifact exists locally, fetching it if necessary
pub async fn ensure_artifact(config: &ModelConfig) -> Result<PathBuf> {
    let path = PathBuf::from(&config.artifact_path);
    if path.exists() {
        debug!("Using local model artifact at {}", path.display());
        return Ok(path);
    }

    let Some(url) = &config.remote_url else {
        return Err(TempcastError::model_load(format!(
            "artifact {} not found and no remote URL is configured",
            path.display()
        ))
        .into());
    };

    info!("Local artifact missing, fetching from {url}");
    let bytes = download(url, config).await?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write artifact to {}", path.display()))?;

    info!(
        "Stored model artifact at {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    Ok(path)
}

/// Download the artifact with retries and exponential backoff
async fn download(url: &str, config: &ModelConfig) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.fetch_timeout_seconds.into()))
        .user_agent(concat!("tempcast/", env!("CARGO_PKG_VERSION")))
        .build()
        .with_context(|| "Failed to create HTTP client")?;

    let max_attempts = config.fetch_max_retries + 1;

    for attempt in 1..=max_attempts {
        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    let bytes = response
                        .bytes()
                        .await
                        .with_context(|| "Failed to read artifact response body")?;
                    debug!("Fetched artifact ({} bytes, attempt {attempt})", bytes.len());
                    return Ok(bytes.to_vec());
                }

                // Client errors will not improve on retry.
                if status.is_client_error() || attempt == max_attempts {
                    return Err(TempcastError::fetch(format!(
                        "server answered {status} for {url}"
                    ))
                    .into());
                }

                let backoff = Duration::from_millis(1000 * 2_u64.pow(attempt - 1));
                warn!(
                    "Artifact fetch returned {status}, retrying in {:.1}s",
                    backoff.as_secs_f64()
                );
                tokio::time::sleep(backoff).await;
            }
            Err(e) => {
                if attempt == max_attempts {
                    return Err(TempcastError::fetch(format!(
                        "network error after {max_attempts} attempts: {e}"
                    ))
                    .into());
                }

                let backoff = Duration::from_millis(1000 * 2_u64.pow(attempt - 1));
                warn!(
                    "Artifact fetch failed ({e}), retrying in {:.1}s",
                    backoff.as_secs_f64()
                );
                tokio::time::sleep(backoff).await;
            }
        }
    }

    Err(TempcastError::fetch(format!("fetch from {url} exhausted all attempts")).into())
}

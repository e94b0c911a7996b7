//! Storage setup and initialization

use anyhow::{Context, Result};
use nmonchart_core::Config;
use nmonchart_storage::{create_storage, Storage};
use std::sync::Arc;

/// Create the spool directory and the upload storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tokio::fs::create_dir_all(config.temp_dir())
        .await
        .with_context(|| {
            format!(
                "Failed to create upload temp directory {}",
                config.temp_dir().display()
            )
        })?;

    tracing::info!("Initializing upload storage...");
    let storage = create_storage(config).await?;
    tracing::info!(
        upload_dir = %storage.root().display(),
        temp_dir = %config.temp_dir().display(),
        "Upload storage initialized successfully"
    );

    Ok(storage)
}

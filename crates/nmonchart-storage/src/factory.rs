use crate::{LocalStorage, Storage, StorageResult};
use nmonchart_core::Config;
use std::sync::Arc;

/// Create the storage backend for the configured upload directory
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = LocalStorage::new(config.upload_dir()).await?;

    tracing::info!(
        upload_dir = %config.upload_dir().display(),
        "Local upload storage initialized"
    );

    Ok(Arc::new(storage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nmonchart_core::UploadConfig;
    use tempfile::tempdir;

    #[tokio::test]
    async fn creates_missing_upload_dir() {
        let dir = tempdir().unwrap();
        let upload_dir = dir.path().join("nmon_upload");
        let config = Config::from(UploadConfig::new(&upload_dir, dir.path().join("spool")));

        let storage = create_storage(&config).await.unwrap();

        assert_eq!(storage.root(), upload_dir.as_path());
        assert!(upload_dir.is_dir());
    }
}

use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Prefix of the hidden files used to stage cross-filesystem moves.
const STAGING_PREFIX: &str = ".nmonchart-staging-";

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    /// Makes the direct rename fail, to drive the staged-copy path.
    #[cfg(test)]
    rename_error: Option<io::ErrorKind>,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Upload directory (e.g., "/webpages/docs/nmon_upload/"), created if missing
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            #[cfg(test)]
            rename_error: None,
        })
    }

    /// Convert a file name to its path under the root.
    ///
    /// Only single-segment names are accepted, so nothing can resolve outside the
    /// upload directory.
    fn key_to_path(&self, file_name: &str) -> StorageResult<PathBuf> {
        if file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\', '\0'])
        {
            return Err(StorageError::InvalidKey(format!(
                "'{}' is not a plain file name",
                file_name
            )));
        }

        Ok(self.base_path.join(file_name))
    }

    async fn rename(&self, source: &Path, dest: &Path) -> io::Result<()> {
        #[cfg(test)]
        if let Some(kind) = self.rename_error {
            return Err(io::Error::from(kind));
        }
        fs::rename(source, dest).await
    }

    /// Copy `source` into a hidden file beside `dest`, then rename it over `dest`.
    ///
    /// Used when a direct rename is impossible (e.g. the spool directory is on another
    /// filesystem). The staging file is removed if any step fails.
    async fn stage_and_replace(&self, source: &Path, dest: &Path) -> StorageResult<()> {
        let root = self.base_path.clone();
        let staged = tokio::task::spawn_blocking(move || {
            tempfile::Builder::new()
                .prefix(STAGING_PREFIX)
                .tempfile_in(&root)
        })
        .await
        .map_err(|e| StorageError::BackendError(format!("Staging task failed: {}", e)))?
        .map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create staging file: {}", e))
        })?;

        let (file, staged_path) = staged.into_parts();
        drop(file);

        fs::copy(source, &staged_path).await.map_err(|e| {
            StorageError::UploadFailed(format!(
                "Failed to copy {} to {}: {}",
                source.display(),
                staged_path.display(),
                e
            ))
        })?;

        fs::File::open(&staged_path)
            .await?
            .sync_all()
            .await
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to sync file {}: {}",
                    staged_path.display(),
                    e
                ))
            })?;

        let dest_buf = dest.to_path_buf();
        tokio::task::spawn_blocking(move || staged_path.persist(&dest_buf))
            .await
            .map_err(|e| StorageError::BackendError(format!("Staging task failed: {}", e)))?
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to rename staged file to {}: {}",
                    dest.display(),
                    e.error
                ))
            })?;

        if let Err(e) = fs::remove_file(source).await {
            tracing::warn!(
                error = %e,
                source = %source.display(),
                "Failed to remove spooled file after staged copy"
            );
        }

        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn store_file(&self, source: &Path, file_name: &str) -> StorageResult<PathBuf> {
        let dest = self.key_to_path(file_name)?;
        let start = std::time::Instant::now();

        if !fs::try_exists(source).await.unwrap_or(false) {
            return Err(StorageError::NotFound(source.display().to_string()));
        }

        if let Err(e) = self.rename(source, &dest).await {
            tracing::debug!(
                error = %e,
                source = %source.display(),
                dest = %dest.display(),
                "Direct rename failed, staging copy in upload directory"
            );
            self.stage_and_replace(source, &dest).await?;
        }

        tracing::info!(
            path = %dest.display(),
            file_name = %file_name,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage store successful"
        );

        Ok(dest)
    }

    async fn health_check(&self) -> StorageResult<()> {
        let meta = fs::metadata(&self.base_path)
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))?;
        if !meta.is_dir() {
            return Err(StorageError::ConfigError(format!(
                "{} is not a directory",
                self.base_path.display()
            )));
        }
        Ok(())
    }

    fn root(&self) -> &Path {
        &self.base_path
    }
}

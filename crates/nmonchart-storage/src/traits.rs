//! Storage abstraction trait
//!
//! This module defines the Storage trait that upload destinations implement.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid file name: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The upload handler only depends on this trait, so tests and alternative
/// deployments can swap the destination without touching the handler.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Move a spooled file into storage under `file_name` and return its final path.
    ///
    /// The source is consumed. An existing file with the same name is replaced, and
    /// readers never observe a partially written destination.
    async fn store_file(&self, source: &Path, file_name: &str) -> StorageResult<PathBuf>;

    /// Verify the storage root is reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Directory files are stored in.
    fn root(&self) -> &Path;
}

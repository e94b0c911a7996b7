//! Multipart extraction for the upload endpoint

use axum::extract::Multipart;
use nmonchart_core::constants::{FALLBACK_CONTENT_TYPE, UPLOAD_FIELD_NAME};
use nmonchart_core::{AppError, UploadRequest};
use std::path::{Path, PathBuf};
use tempfile::TempPath;
use tokio::io::AsyncWriteExt;

use crate::error::multipart_error;

/// Prefix of spool files in the temp directory.
const SPOOL_PREFIX: &str = "upload-";

/// An upload request whose body sits in a spool file.
///
/// Dropping this removes the spool file unless it has already been moved away.
#[derive(Debug)]
pub struct SpooledUpload {
    pub request: UploadRequest,
    temp: Option<TempPath>,
}

impl SpooledUpload {
    /// Request with no file attached: empty name, type and temp path.
    pub fn empty() -> Self {
        Self {
            request: UploadRequest {
                file_name: String::new(),
                content_type: String::new(),
                size: 0,
                temp_path: PathBuf::new(),
            },
            temp: None,
        }
    }

    pub fn has_file(&self) -> bool {
        self.temp.is_some()
    }
}

async fn create_spool_file(temp_dir: &Path) -> Result<(tokio::fs::File, TempPath), AppError> {
    let dir = temp_dir.to_path_buf();
    let named = tokio::task::spawn_blocking(move || {
        tempfile::Builder::new()
            .prefix(SPOOL_PREFIX)
            .tempfile_in(&dir)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Spool task failed: {}", e)))?
    .map_err(|e| AppError::Internal(format!("Failed to create spool file: {}", e)))?;

    let (file, path) = named.into_parts();
    Ok((tokio::fs::File::from_std(file), path))
}

/// Stream the `fileToUpload` field into a spool file under `temp_dir`.
///
/// Every byte is counted toward the reported size, but nothing past `max_file_size`
/// is written: such an upload is rejected anyway. Other fields are skipped. A second
/// file field is rejected.
pub async fn spool_multipart_upload(
    mut multipart: Multipart,
    temp_dir: &Path,
    max_file_size: u64,
) -> Result<SpooledUpload, AppError> {
    let mut spooled: Option<SpooledUpload> = None;

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        if spooled.is_some() {
            return Err(AppError::InvalidInput(format!(
                "Multiple file fields are not allowed; send exactly one field named '{}'",
                UPLOAD_FIELD_NAME
            )));
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        let (mut file, temp_path) = create_spool_file(temp_dir).await?;
        let mut size: u64 = 0;

        while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
            let len = chunk.len() as u64;
            if size < max_file_size {
                let room = (max_file_size - size).min(len) as usize;
                file.write_all(&chunk[..room]).await?;
            }
            size += len;
        }
        file.flush().await?;

        tracing::debug!(
            file_name = %file_name,
            content_type = %content_type,
            size,
            temp_path = %temp_path.display(),
            "Upload spooled"
        );

        spooled = Some(SpooledUpload {
            request: UploadRequest {
                file_name,
                content_type,
                size,
                temp_path: temp_path.to_path_buf(),
            },
            temp: Some(temp_path),
        });
    }

    Ok(spooled.unwrap_or_else(SpooledUpload::empty))
}

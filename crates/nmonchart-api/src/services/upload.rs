//! Upload service
//!
//! Runs the checks on a spooled upload and, when they all pass, hands the file to
//! storage. Every failure ends up in the returned report; nothing here returns an
//! error to the caller.

use std::sync::Arc;

use nmonchart_core::{
    base_name, destination_path, file_extension, validate_upload, UploadDiagnostics,
    UploadError, UploadOutcome, UploadReport, UploadRequest,
};

use crate::state::AppState;

pub struct UploadService {
    state: Arc<AppState>,
}

impl UploadService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Validate `request` and move its file into the upload directory if it passes.
    pub async fn process(&self, request: &UploadRequest) -> UploadReport {
        let config = self.state.config.upload();
        let destination = destination_path(&config.upload_dir, &request.file_name);

        let diagnostics = UploadDiagnostics {
            name: request.file_name.clone(),
            size: request.size,
            content_type: request.content_type.clone(),
            temp_path: request.temp_path.display().to_string(),
            extension: file_extension(&request.file_name).to_string(),
        };

        let validation = validate_upload(request, config);
        if !validation.ok() {
            tracing::info!(
                file_name = %request.file_name,
                size = request.size,
                failures = validation.failures().count(),
                "Upload rejected"
            );
            return UploadReport {
                diagnostics,
                validation,
                outcome: UploadOutcome::Rejected,
            };
        }

        let file_name = base_name(&request.file_name).to_string();
        let outcome = match self
            .state
            .storage
            .store_file(&request.temp_path, &file_name)
            .await
        {
            Ok(stored) => {
                tracing::info!(
                    file_name = %file_name,
                    size = request.size,
                    destination = %stored.display(),
                    "Upload stored"
                );
                UploadOutcome::Stored { file_name }
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    file_name = %file_name,
                    destination = %destination.display(),
                    "Failed to move upload into place"
                );
                UploadOutcome::MoveFailed(UploadError::MoveFailure(e.to_string()))
            }
        };

        UploadReport {
            diagnostics,
            validation,
            outcome,
        }
    }
}

use crate::error::HttpAppError;
use crate::html::render_report;
use crate::services::UploadService;
use crate::state::AppState;
use crate::utils::upload::spool_multipart_upload;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Html,
};
use nmonchart_core::AppError;
use std::sync::Arc;

/// Accept one `fileToUpload` submission and answer with the status page.
///
/// Validation and move failures are part of the page and still answer 200. Only an
/// unreadable request body produces an error response.
#[tracing::instrument(skip(state, multipart), fields(request_id))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, HttpAppError> {
    let request_id = uuid::Uuid::new_v4().to_string();
    tracing::Span::current().record("request_id", request_id.as_str());

    let multipart =
        multipart.map_err(|rejection| AppError::InvalidInput(rejection.body_text()))?;

    let spooled = spool_multipart_upload(
        multipart,
        state.config.temp_dir(),
        state.config.max_file_size_bytes(),
    )
    .await?;

    if !spooled.has_file() {
        tracing::debug!("Request carried no upload field");
    }

    let report = UploadService::new(&state).process(&spooled.request).await;

    Ok(Html(render_report(
        &report,
        state.config.upload_form_url(),
        state.config.chart_index_url(),
    )))
}

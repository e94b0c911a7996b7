use crate::constants::UPLOAD_PATH;
use crate::html::render_upload_form;
use crate::state::AppState;
use axum::{extract::State, response::Html};
use std::sync::Arc;

pub async fn upload_form(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_upload_form(
        UPLOAD_PATH,
        state.config.allowed_extensions(),
        state.config.max_file_size_bytes(),
    ))
}

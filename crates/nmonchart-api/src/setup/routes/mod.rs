//! Route configuration and setup.
//!
//! Upload and form routes are defined here; health checks live in [health](health).

mod health;

use crate::constants::{
    HEALTH_PATH, LIVENESS_PATH, UPLOAD_ALIAS_PATH, UPLOAD_FORM_PATH, UPLOAD_PATH,
};
use crate::handlers::{upload::upload_file, upload_form::upload_form};
use crate::middleware::{security_headers_middleware, SecurityHeadersConfig};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use nmonchart_core::Config;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub async fn setup_routes(
    config: &Config,
    state: Arc<AppState>,
) -> Result<Router<()>, anyhow::Error> {
    let security_headers_config = Arc::new(SecurityHeadersConfig::new(config.is_production()));

    tracing::info!(
        max_request_body_bytes = config.max_request_body_bytes(),
        "Request body limit layer enabled"
    );

    let app = Router::new()
        .merge(upload_routes())
        .merge(health_routes())
        // axum's default 2 MB extractor limit would cut uploads short of the file limit
        .layer(RequestBodyLimitLayer::new(config.max_request_body_bytes()))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn_with_state(
            security_headers_config,
            security_headers_middleware,
        ))
        .with_state(state);

    Ok(app)
}

fn upload_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(upload_form))
        .route(UPLOAD_FORM_PATH, get(upload_form))
        .route(UPLOAD_PATH, post(upload_file))
        .route(UPLOAD_ALIAS_PATH, post(upload_file))
}

fn health_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(HEALTH_PATH, get(health::health_check))
        .route(LIVENESS_PATH, get(health::liveness_check))
}

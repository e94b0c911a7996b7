//! nmonchart API Library
//!
//! This crate provides the HTTP upload endpoint, the pages it serves, and
//! application setup.

// Module declarations
pub mod constants;
mod handlers;
mod html;
mod middleware;
mod services;
pub mod setup;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;

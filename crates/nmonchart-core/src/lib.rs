//! nmonchart Core Library
//!
//! This crate provides the upload domain models, error types, configuration, and the
//! validation rules shared by the storage backend and the HTTP API.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{BaseConfig, Config, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel, UploadError};
pub use models::{
    Check, CheckOutcome, UploadDiagnostics, UploadOutcome, UploadReport, UploadRequest,
    ValidationResult,
};
pub use validation::{base_name, destination_path, file_extension, validate_upload};

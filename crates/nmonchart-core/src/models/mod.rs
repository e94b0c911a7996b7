//! Request-scoped upload models.

pub mod upload;

pub use upload::{
    Check, CheckOutcome, UploadDiagnostics, UploadOutcome, UploadReport, UploadRequest,
    ValidationResult,
};

//! Error types module
//!
//! Two families live here. `UploadError` is the upload taxonomy: every variant is
//! caught by the upload handler and rendered as an inline message in the status
//! page, never as an HTTP error. `AppError` covers everything around the handler
//! (unreadable multipart bodies, spool file failures) and knows how it
//! should be presented over HTTP through `ErrorMetadata`.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like resource limits
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "INVALID_INPUT")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

/// Failures the upload handler reports inline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("File too large: {size} bytes exceeds maximum of {max} bytes")]
    Oversize { size: u64, max: u64 },

    #[error("Unsupported extension '{extension}', allowed: {}", .allowed.join(", "))]
    UnsupportedExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Failed to move upload into place: {0}")]
    MoveFailure(String),
}

impl UploadError {
    /// Text shown to the person who submitted the file.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Oversize { .. } => "Sorry, your file is too large.".to_string(),
            UploadError::UnsupportedExtension { allowed, .. } => {
                let listed: Vec<String> = allowed.iter().map(|ext| format!(".{}", ext)).collect();
                format!("Sorry, only {} files are allowed.", listed.join(" or "))
            }
            UploadError::MoveFailure(_) => {
                "Sorry, there was an error uploading your file.".to_string()
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, recoverable, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, bool, bool, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", false, false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", false, false, LogLevel::Warn),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", true, true, LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();
        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }
        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn is_recoverable(&self) -> bool {
        app_error_static_metadata(self).2
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).3
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).4
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_match_status_page_wording() {
        let oversize = UploadError::Oversize {
            size: 11_000_001,
            max: 11_000_000,
        };
        assert_eq!(oversize.user_message(), "Sorry, your file is too large.");

        let ext = UploadError::UnsupportedExtension {
            extension: "txt".to_string(),
            allowed: vec!["nmon".to_string(), "gif".to_string()],
        };
        assert_eq!(
            ext.user_message(),
            "Sorry, only .nmon or .gif files are allowed."
        );

        let moved = UploadError::MoveFailure("permission denied".to_string());
        assert_eq!(
            moved.user_message(),
            "Sorry, there was an error uploading your file."
        );
    }

    #[test]
    fn display_keeps_technical_detail() {
        let moved = UploadError::MoveFailure("permission denied".to_string());
        assert!(moved.to_string().contains("permission denied"));
        assert!(!moved.user_message().contains("permission denied"));
    }

    #[test]
    fn internal_errors_are_sensitive() {
        let err = AppError::Internal("disk exploded".to_string());
        assert_eq!(err.http_status_code(), 500);
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[test]
    fn invalid_input_is_client_error() {
        let err = AppError::InvalidInput("Failed to read multipart".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn io_errors_become_internal() {
        let err = AppError::from(io::Error::new(io::ErrorKind::Other, "no space left"));
        assert_eq!(err.error_type(), "Internal");
        assert!(err.detailed_message().contains("no space left"));
        assert_eq!(err.client_message(), "Internal server error");
    }
}

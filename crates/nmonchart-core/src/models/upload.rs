use std::path::PathBuf;

use crate::error::UploadError;

/// Message shown when validation rejects the upload.
pub const NOT_UPLOADED_MESSAGE: &str = "Sorry, your file was not uploaded.";

/// One file submission, as handed over by the request layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Client-supplied file name, possibly carrying directory components.
    pub file_name: String,
    /// Client-supplied MIME type. Untrusted and only echoed back.
    pub content_type: String,
    pub size: u64,
    /// Where the request layer spooled the body. Empty when no file was sent.
    pub temp_path: PathBuf,
}

/// Validation rule applied to an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Size,
    Extension,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: Check,
    pub result: Result<(), UploadError>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    /// Failure text for the status page; passing checks print nothing.
    pub fn message(&self) -> Option<String> {
        self.result.as_ref().err().map(UploadError::user_message)
    }
}

/// Outcome of every check, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    checks: Vec<CheckOutcome>,
}

impl ValidationResult {
    pub fn new(checks: Vec<CheckOutcome>) -> Self {
        Self { checks }
    }

    pub fn ok(&self) -> bool {
        self.checks.iter().all(CheckOutcome::passed)
    }

    pub fn checks(&self) -> &[CheckOutcome] {
        &self.checks
    }

    pub fn failures(&self) -> impl Iterator<Item = &UploadError> {
        self.checks.iter().filter_map(|c| c.result.as_ref().err())
    }

    pub fn messages(&self) -> Vec<String> {
        self.checks.iter().filter_map(CheckOutcome::message).collect()
    }
}

/// The five fields echoed at the top of the status page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDiagnostics {
    pub name: String,
    pub size: u64,
    pub content_type: String,
    pub temp_path: String,
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Validation failed; the file was left where the request layer put it.
    Rejected,
    Stored { file_name: String },
    MoveFailed(UploadError),
}

/// Everything the status page shows for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub diagnostics: UploadDiagnostics,
    pub validation: ValidationResult,
    pub outcome: UploadOutcome,
}

impl UploadReport {
    pub fn is_stored(&self) -> bool {
        matches!(self.outcome, UploadOutcome::Stored { .. })
    }

    /// Plain-text messages in page order. The success line is rendered separately
    /// as a list item and is not part of this list.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = self.validation.messages();
        match &self.outcome {
            UploadOutcome::Rejected => messages.push(NOT_UPLOADED_MESSAGE.to_string()),
            UploadOutcome::MoveFailed(err) => messages.push(err.user_message()),
            UploadOutcome::Stored { .. } => {}
        }
        messages
    }

    /// Success line naming the stored file.
    pub fn success_message(&self) -> Option<String> {
        match &self.outcome {
            UploadOutcome::Stored { file_name } => {
                Some(format!("The file {} has been uploaded.", file_name))
            }
            _ => None,
        }
    }
}

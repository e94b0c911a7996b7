//! Route paths
//!
//! The legacy `.php` and `.html` paths keep existing bookmarks and the upload form's
//! `action` working; the short paths are aliases.

/// Upload endpoint the form posts to
pub const UPLOAD_PATH: &str = "/nmon_upload.php";

/// Alias for [`UPLOAD_PATH`]
pub const UPLOAD_ALIAS_PATH: &str = "/upload";

/// Upload form page
pub const UPLOAD_FORM_PATH: &str = "/nmon_upload.html";

pub const HEALTH_PATH: &str = "/health";
pub const LIVENESS_PATH: &str = "/health/live";

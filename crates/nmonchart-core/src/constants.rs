//! Compiled-in defaults for the upload service.

/// Directory accepted uploads are moved into.
pub const DEFAULT_UPLOAD_DIR: &str = "/webpages/docs/nmon_upload/";

/// Largest accepted upload. Sizes strictly greater than this are rejected.
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 11_000_000;

/// Extensions accepted by the allow-list. Compared case-sensitively.
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 2] = ["nmon", "gif"];

/// Upper bound on a whole request body, enforced before the handler runs.
pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 64 * 1024 * 1024;

pub const DEFAULT_UPLOAD_FORM_URL: &str = "http://w3.aixncc.uk.ibm.com/nmon_upload.html";
pub const DEFAULT_CHART_INDEX_URL: &str = "http://w3.aixncc.uk.ibm.com/nmonchart/index.html";

pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Subdirectory of the system temp dir used for in-flight uploads.
pub const DEFAULT_TEMP_SUBDIR: &str = "nmonchart-upload";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "fileToUpload";

/// Content type recorded when the client sends none.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

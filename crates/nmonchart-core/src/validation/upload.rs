//! Upload rules: base-name derivation, extension allow-list, size threshold.

use std::path::{Path, PathBuf};

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::models::{Check, CheckOutcome, UploadRequest, ValidationResult};

/// Final segment of a client-supplied file name.
///
/// Both `/` and `\` count as separators, since browsers on Windows may send a full
/// local path. `.` and `..` collapse to an empty name so no directory component
/// from the client ever reaches the filesystem.
pub fn base_name(file_name: &str) -> &str {
    let trimmed = file_name.trim_end_matches(['/', '\\']);
    let last = trimmed.rsplit(['/', '\\']).next().unwrap_or("");
    match last {
        "." | ".." => "",
        other => other,
    }
}

/// Text after the final `.` of the base name, or empty when there is none.
pub fn file_extension(file_name: &str) -> &str {
    base_name(file_name)
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("")
}

/// Upload directory joined with the base name. Same-named uploads share a path.
pub fn destination_path(upload_dir: &Path, file_name: &str) -> PathBuf {
    upload_dir.join(base_name(file_name))
}

/// Rejects sizes strictly greater than `max_size`.
pub fn check_size(size: u64, max_size: u64) -> Result<(), UploadError> {
    if size > max_size {
        return Err(UploadError::Oversize {
            size,
            max: max_size,
        });
    }
    Ok(())
}

/// Exact, case-sensitive allow-list match.
pub fn check_extension(extension: &str, allowed_extensions: &[String]) -> Result<(), UploadError> {
    if !allowed_extensions.iter().any(|ext| ext == extension) {
        return Err(UploadError::UnsupportedExtension {
            extension: extension.to_string(),
            allowed: allowed_extensions.to_vec(),
        });
    }
    Ok(())
}

/// Run every check. A failing check never short-circuits the next one.
pub fn validate_upload(request: &UploadRequest, config: &UploadConfig) -> ValidationResult {
    let extension = file_extension(&request.file_name);

    let checks = vec![
        CheckOutcome {
            check: Check::Size,
            result: check_size(request.size, config.max_file_size_bytes),
        },
        CheckOutcome {
            check: Check::Extension,
            result: check_extension(extension, &config.allowed_extensions),
        },
    ];

    for failed in checks.iter().filter(|c| !c.passed()) {
        if let Err(err) = &failed.result {
            tracing::debug!(
                check = ?failed.check,
                error = %err,
                file_name = %request.file_name,
                "Upload check failed"
            );
        }
    }

    ValidationResult::new(checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> UploadConfig {
        UploadConfig::new("/webpages/docs/nmon_upload/", "/tmp/spool")
    }

    fn request(file_name: &str, size: u64) -> UploadRequest {
        UploadRequest {
            file_name: file_name.to_string(),
            content_type: "application/octet-stream".to_string(),
            size,
            temp_path: PathBuf::from("/tmp/spool/upload"),
        }
    }

    #[test]
    fn base_name_strips_traversal() {
        assert_eq!(base_name("../../etc/passwd"), "passwd");
        assert_eq!(base_name("/abs/path/host.nmon"), "host.nmon");
        assert_eq!(base_name("C:\\Users\\me\\host.nmon"), "host.nmon");
        assert_eq!(base_name("dir/"), "dir");
        assert_eq!(base_name("host.nmon"), "host.nmon");
    }

    #[test]
    fn base_name_never_yields_dot_segments() {
        assert_eq!(base_name(".."), "");
        assert_eq!(base_name("a/.."), "");
        assert_eq!(base_name("."), "");
        assert_eq!(base_name(""), "");
        assert_eq!(base_name("/"), "");
    }

    #[test]
    fn destination_uses_only_final_segment() {
        let dest = destination_path(Path::new("/webpages/docs/nmon_upload/"), "../../etc/passwd");
        assert_eq!(dest, PathBuf::from("/webpages/docs/nmon_upload/passwd"));
    }

    #[test]
    fn extension_is_text_after_last_dot() {
        assert_eq!(file_extension("host_220101.tar.nmon"), "nmon");
        assert_eq!(file_extension(".nmon"), "nmon");
        assert_eq!(file_extension("README"), "");
        assert_eq!(file_extension("trailing."), "");
        assert_eq!(file_extension("dir.nmon/evil"), "");
    }

    #[test]
    fn size_boundary_is_inclusive() {
        assert!(check_size(11_000_000, 11_000_000).is_ok());
        assert_eq!(
            check_size(11_000_001, 11_000_000),
            Err(UploadError::Oversize {
                size: 11_000_001,
                max: 11_000_000
            })
        );
    }

    #[test]
    fn extension_check_is_case_sensitive() {
        let allowed = config().allowed_extensions;
        assert!(check_extension("nmon", &allowed).is_ok());
        assert!(check_extension("gif", &allowed).is_ok());
        assert!(matches!(
            check_extension("NMON", &allowed),
            Err(UploadError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn validate_runs_both_checks() {
        let result = validate_upload(&request("report.TXT", 11_000_001), &config());
        assert!(!result.ok());
        let checks: Vec<Check> = result.checks().iter().map(|c| c.check).collect();
        assert_eq!(checks, vec![Check::Size, Check::Extension]);
        assert_eq!(result.failures().count(), 2);
    }

    #[test]
    fn validate_accepts_nmon_at_limit() {
        let result = validate_upload(&request("host.nmon", 11_000_000), &config());
        assert!(result.ok());
        assert!(result.messages().is_empty());
    }

    #[test]
    fn validate_rejects_missing_file() {
        let result = validate_upload(&request("", 0), &config());
        assert!(!result.ok());
        assert_eq!(result.failures().count(), 1);
    }
}

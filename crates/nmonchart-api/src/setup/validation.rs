//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use nmonchart_core::Config;

/// Validate critical configuration values
///
/// Runs the upload rule checks from [`Config::validate`] and adds the deployment
/// checks that only matter to the HTTP service.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.max_file_size_bytes() == 0 {
        return Err(anyhow::anyhow!("Max file size cannot be 0"));
    }

    if config.temp_dir() == config.upload_dir() {
        return Err(anyhow::anyhow!(
            "UPLOAD_TEMP_DIR must differ from UPLOAD_DIR ({})",
            config.upload_dir().display()
        ));
    }

    for (name, url) in [
        ("UPLOAD_FORM_URL", config.upload_form_url()),
        ("CHART_INDEX_URL", config.chart_index_url()),
    ] {
        if url.trim().is_empty() {
            return Err(anyhow::anyhow!("{} cannot be empty", name));
        }
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nmonchart_core::UploadConfig;

    #[test]
    fn stock_config_passes() {
        let config = Config::from(UploadConfig::new("/srv/nmon_upload", "/tmp/spool"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn production_config_passes() {
        let mut upload = UploadConfig::new("/srv/nmon_upload", "/tmp/spool");
        upload.base.environment = "production".to_string();
        let config = Config::from(upload);
        assert!(config.is_production());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn temp_dir_must_differ_from_upload_dir() {
        let config = Config::from(UploadConfig::new("/srv/nmon_upload", "/srv/nmon_upload"));
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn zero_file_size_is_rejected() {
        let mut upload = UploadConfig::new("/srv/nmon_upload", "/tmp/spool");
        upload.max_file_size_bytes = 0;
        assert!(validate_config(&Config::from(upload)).is_err());
    }

    #[test]
    fn empty_link_is_rejected() {
        let mut upload = UploadConfig::new("/srv/nmon_upload", "/tmp/spool");
        upload.chart_index_url = " ".to_string();
        assert!(validate_config(&Config::from(upload)).is_err());
    }
}

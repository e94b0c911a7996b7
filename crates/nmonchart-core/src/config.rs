//! Configuration module
//!
//! This module provides the configuration structures for the upload service: the
//! server settings and the fixed upload rules (directory, size limit, extension
//! allow-list, navigation links) that are passed into the upload handler.

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_CHART_INDEX_URL, DEFAULT_MAX_FILE_SIZE_BYTES,
    DEFAULT_MAX_REQUEST_BODY_BYTES, DEFAULT_SERVER_PORT, DEFAULT_TEMP_SUBDIR, DEFAULT_UPLOAD_DIR,
    DEFAULT_UPLOAD_FORM_URL,
};

/// Server settings not tied to upload rules
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    pub max_request_body_bytes: usize,
    /// `compact` or `json`
    pub log_format: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_SERVER_PORT,
            environment: "development".to_string(),
            max_request_body_bytes: DEFAULT_MAX_REQUEST_BODY_BYTES,
            log_format: "compact".to_string(),
        }
    }
}

/// Upload rules and locations
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub base: BaseConfig,
    pub upload_dir: PathBuf,
    /// Where the request layer spools file bodies before the handler runs.
    pub temp_dir: PathBuf,
    pub max_file_size_bytes: u64,
    /// Exact, case-sensitive extension allow-list.
    pub allowed_extensions: Vec<String>,
    pub upload_form_url: String,
    pub chart_index_url: String,
}

impl UploadConfig {
    /// Build a configuration with the stock rules for the given directories.
    pub fn new(upload_dir: impl Into<PathBuf>, temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            base: BaseConfig::default(),
            upload_dir: upload_dir.into(),
            temp_dir: temp_dir.into(),
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            upload_form_url: DEFAULT_UPLOAD_FORM_URL.to_string(),
            chart_index_url: DEFAULT_CHART_INDEX_URL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            max_request_body_bytes: env::var("MAX_REQUEST_BODY_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_REQUEST_BODY_BYTES.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("MAX_REQUEST_BODY_BYTES must be a valid number"))?,
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
        };

        let max_file_size_bytes = env::var("MAX_FILE_SIZE_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE_BYTES.to_string())
            .parse::<u64>()
            .map_err(|_| anyhow::anyhow!("MAX_FILE_SIZE_BYTES must be a valid number"))?;

        // Case is preserved: the allow-list comparison is exact.
        let allowed_extensions = env::var("ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_EXTENSIONS.join(","))
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let temp_dir = env::var("UPLOAD_TEMP_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir().join(DEFAULT_TEMP_SUBDIR));

        Ok(Self {
            base,
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            temp_dir,
            max_file_size_bytes,
            allowed_extensions,
            upload_form_url: env::var("UPLOAD_FORM_URL")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_FORM_URL.to_string()),
            chart_index_url: env::var("CHART_INDEX_URL")
                .unwrap_or_else(|_| DEFAULT_CHART_INDEX_URL.to_string()),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.upload_dir.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR must not be empty"));
        }

        if self.allowed_extensions.is_empty() {
            return Err(anyhow::anyhow!(
                "ALLOWED_EXTENSIONS must name at least one extension"
            ));
        }

        if let Some(ext) = self
            .allowed_extensions
            .iter()
            .find(|ext| ext.contains('.') || ext.contains('/'))
        {
            return Err(anyhow::anyhow!(
                "ALLOWED_EXTENSIONS entry '{}' must be a bare extension without '.' or '/'",
                ext
            ));
        }

        if (self.base.max_request_body_bytes as u64) <= self.max_file_size_bytes {
            return Err(anyhow::anyhow!(
                "MAX_REQUEST_BODY_BYTES ({}) must exceed MAX_FILE_SIZE_BYTES ({}) so oversize uploads reach the handler",
                self.base.max_request_body_bytes,
                self.max_file_size_bytes
            ));
        }

        Ok(())
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<UploadConfig>);

impl Config {
    fn as_upload(&self) -> &UploadConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.as_upload().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = UploadConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_upload().validate()
    }

    pub fn upload(&self) -> &UploadConfig {
        self.as_upload()
    }

    pub fn server_port(&self) -> u16 {
        self.as_upload().base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.as_upload().base.environment
    }

    pub fn log_format(&self) -> &str {
        &self.as_upload().base.log_format
    }

    pub fn max_request_body_bytes(&self) -> usize {
        self.as_upload().base.max_request_body_bytes
    }

    pub fn upload_dir(&self) -> &Path {
        &self.as_upload().upload_dir
    }

    pub fn temp_dir(&self) -> &Path {
        &self.as_upload().temp_dir
    }

    pub fn max_file_size_bytes(&self) -> u64 {
        self.as_upload().max_file_size_bytes
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.as_upload().allowed_extensions
    }

    pub fn upload_form_url(&self) -> &str {
        &self.as_upload().upload_form_url
    }

    pub fn chart_index_url(&self) -> &str {
        &self.as_upload().chart_index_url
    }
}

impl From<UploadConfig> for Config {
    fn from(config: UploadConfig) -> Self {
        Config(Box::new(config))
    }
}

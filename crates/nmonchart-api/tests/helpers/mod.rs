//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p nmonchart-api`. Every app gets its own
//! upload and spool directories under a fresh temp dir.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use nmonchart_api::setup::build_app;
use nmonchart_api::state::AppState;
use nmonchart_core::{Config, UploadConfig};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server, state, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        self.state.config.upload_dir()
    }

    pub fn temp_dir(&self) -> &Path {
        self.state.config.temp_dir()
    }

    pub fn stored(&self, name: &str) -> PathBuf {
        self.upload_dir().join(name)
    }

    /// File names currently in `dir`, sorted.
    pub fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Setup a test app with the stock upload rules.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup a test app, letting the caller adjust the configuration first.
pub async fn setup_test_app_with(customize: impl FnOnce(&mut UploadConfig)) -> TestApp {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut upload = UploadConfig::new(
        temp_dir.path().join("nmon_upload"),
        temp_dir.path().join("spool"),
    );
    customize(&mut upload);

    let (state, router) = build_app(Config::from(upload)).await.unwrap();
    let server = TestServer::new(router.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        state,
        _temp_dir: temp_dir,
    }
}

/// Form with a `fileToUpload` part and the submit button field the HTML form sends.
pub fn upload_form(file_name: &str, content_type: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new()
        .add_part(
            "fileToUpload",
            Part::bytes(data)
                .file_name(file_name)
                .mime_type(content_type),
        )
        .add_text("submit", "Upload File")
}

/// Minimal nmon capture header.
pub fn nmon_data() -> Vec<u8> {
    b"AAA,progname,nmon\nAAA,command,nmon -f -s 60 -c 1440\nAAA,host,aixlpar01\n".to_vec()
}

#![allow(dead_code)]

//! Test infrastructure for folio-server API tests

use folio_core::ProjectRecord;
use folio_server::AppState;
use folio_store::{
    JsonFileStore, ProjectStore, Result as StoreResult, StoreError, UploadDirectory,
};

use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "----folio-test-boundary";

/// Scratch directory holding the store file and uploads for one test
pub struct TestContext {
    pub temp: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.temp.path().join("projects.json")
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.temp.path().join("uploads")
    }

    pub fn uploads(&self) -> UploadDirectory {
        UploadDirectory::new(self.uploads_dir(), "/uploads")
    }

    /// AppState backed by a JSON file in the temp directory
    pub fn file_backed_state(&self) -> AppState {
        AppState::new(Arc::new(JsonFileStore::new(self.data_file())), self.uploads())
    }

    pub fn state_with_store(&self, store: Arc<dyn ProjectStore>) -> AppState {
        AppState::new(store, self.uploads())
    }

    /// Parsed contents of the store file
    pub fn stored_records(&self) -> Vec<ProjectRecord> {
        let contents = std::fs::read_to_string(self.data_file()).expect("store file missing");
        serde_json::from_str(&contents).expect("store file is not valid JSON")
    }

    pub fn upload_count(&self) -> usize {
        count_files(&self.uploads_dir())
    }
}

pub fn count_files(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

/// Store that fails every operation
pub struct FailingStore;

#[async_trait]
impl ProjectStore for FailingStore {
    async fn append(&self, _record: ProjectRecord) -> StoreResult<()> {
        Err(StoreError::io(
            Path::new("projects.json"),
            IoError::new(ErrorKind::PermissionDenied, "read-only filesystem"),
        ))
    }

    async fn list_all(&self) -> StoreResult<Vec<ProjectRecord>> {
        Err(StoreError::io(
            Path::new("projects.json"),
            IoError::new(ErrorKind::PermissionDenied, "read-only filesystem"),
        ))
    }
}

/// Builds a multipart/form-data body
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

pub fn multipart_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/projects")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request and collect status and body
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

/// Submit a project with the given text fields and no image
pub async fn submit_text(app: &Router, name: &str, description: &str) -> (StatusCode, String) {
    let body = MultipartBody::new()
        .text("projectName", name)
        .text("projectDescription", description)
        .finish();

    let (status, bytes) = send(app, multipart_request(body)).await;
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

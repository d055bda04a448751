use crate::{ServerError, ServerResult};

use folio_config::{Config, StorageConfig};
use folio_store::{JsonFileStore, ProjectStore, UploadDirectory};

use std::path::PathBuf;
use std::sync::Arc;

use log::info;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub uploads: UploadDirectory,
    /// Rendered pages served as the router fallback
    pub site_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn ProjectStore>, uploads: UploadDirectory) -> Self {
        Self {
            store,
            uploads,
            site_dir: None,
            max_upload_bytes: StorageConfig::default().max_upload_bytes,
        }
    }

    pub fn with_site_dir(mut self, site_dir: impl Into<PathBuf>) -> Self {
        self.site_dir = Some(site_dir.into());
        self
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Build the file-backed state described by `config`.
    ///
    /// Creates the uploads directory so it can be served before the first
    /// submission arrives.
    pub fn from_config(config: &Config) -> ServerResult<Self> {
        let data_file = config.data_file_path()?;
        let uploads_dir = config.uploads_dir_path()?;

        std::fs::create_dir_all(&uploads_dir).map_err(|e| ServerError::Io {
            path: uploads_dir.clone(),
            source: e,
        })?;

        info!("Project store: {}", data_file.display());
        info!(
            "Uploads: {} -> {}",
            config.storage.uploads_public_path,
            uploads_dir.display()
        );

        let store: Arc<dyn ProjectStore> = Arc::new(JsonFileStore::new(data_file));
        let uploads = UploadDirectory::new(uploads_dir, &config.storage.uploads_public_path);

        let mut state =
            Self::new(store, uploads).with_max_upload_bytes(config.storage.max_upload_bytes);

        if let Some(site_dir) = config.site_dir_path()? {
            info!("Serving site from {}", site_dir.display());
            state = state.with_site_dir(site_dir);
        }

        Ok(state)
    }
}

//! Uploads directory - publicly served storage for submitted images.

use crate::{Result as StoreResult, StoreError, StoredUpload};

use std::path::{Path, PathBuf};

use bytes::Bytes;
use log::debug;
use uuid::Uuid;

const MAX_EXTENSION_LENGTH: usize = 8;

#[derive(Debug, Clone)]
pub struct UploadDirectory {
    root: PathBuf,
    public_path: String,
}

impl UploadDirectory {
    /// `public_path` is the URL prefix the directory is served under.
    /// Trailing slashes are ignored.
    pub fn new(root: impl Into<PathBuf>, public_path: &str) -> Self {
        Self {
            root: root.into(),
            public_path: public_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn public_path(&self) -> &str {
        &self.public_path
    }

    /// Public URL path for a stored file name
    pub fn public_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_path, file_name)
    }

    /// Write `data` under a freshly generated name.
    ///
    /// The client's file name only contributes its extension, and only when
    /// that extension is short and alphanumeric.
    pub async fn save(
        &self,
        original_file_name: Option<&str>,
        data: Bytes,
    ) -> StoreResult<StoredUpload> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::io(&self.root, e))?;

        let file_name = generate_file_name(original_file_name);
        let path = self.root.join(&file_name);

        write_new_file(&path, &data).await?;

        debug!("Saved upload {} ({} bytes)", path.display(), data.len());

        Ok(StoredUpload {
            public_url: self.public_url(&file_name),
            file_name,
            path,
        })
    }

    /// Delete a previously saved upload
    pub async fn remove(&self, upload: &StoredUpload) -> StoreResult<()> {
        tokio::fs::remove_file(&upload.path)
            .await
            .map_err(|e| StoreError::io(&upload.path, e))
    }
}

/// Write `data` to `path`, removing whatever was written if the write fails
pub(crate) async fn write_new_file(path: &Path, data: &[u8]) -> StoreResult<()> {
    if let Err(e) = tokio::fs::write(path, data).await {
        let _ = tokio::fs::remove_file(path).await;
        return Err(StoreError::io(path, e));
    }

    Ok(())
}

fn generate_file_name(original_file_name: Option<&str>) -> String {
    let stem = Uuid::new_v4().simple().to_string();

    match original_file_name.and_then(safe_extension) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

pub(crate) fn safe_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;

    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LENGTH
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    Some(ext.to_ascii_lowercase())
}

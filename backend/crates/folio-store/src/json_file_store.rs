//! Flat-file project store.
//!
//! The whole store is one pretty-printed JSON array. Every append reads the
//! file, pushes the record and rewrites the file. Appends through the same
//! `JsonFileStore` are serialized by `write_lock`; the rewrite lands in a
//! sibling `.tmp` file that is renamed over the store, so a reader never sees
//! a partially written array.
//!
//! Two processes sharing one file can still lose updates.

use crate::{ProjectStore, Result as StoreResult, StoreError};

use folio_core::ProjectRecord;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the store file. Absent or blank files are an empty list.
    async fn read_records(&self) -> StoreResult<Vec<ProjectRecord>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|e| StoreError::corrupt(&self.path, e))
    }

    async fn write_records(&self, records: &[ProjectRecord]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| StoreError::io(&tmp_path, e))?;

        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(StoreError::io(&self.path, e));
        }

        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ProjectStore for JsonFileStore {
    async fn append(&self, record: ProjectRecord) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        records.push(record);
        self.write_records(&records).await?;

        debug!(
            "Appended project to {} ({} total)",
            self.path.display(),
            records.len()
        );

        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<ProjectRecord>> {
        self.read_records().await
    }
}

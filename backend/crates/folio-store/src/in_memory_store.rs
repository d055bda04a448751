use crate::{ProjectStore, Result as StoreResult};

use folio_core::ProjectRecord;

use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory [`ProjectStore`] for tests and throwaway servers.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<ProjectRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ProjectRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectStore for InMemoryStore {
    async fn append(&self, record: ProjectRecord) -> StoreResult<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<ProjectRecord>> {
        Ok(self.records.read().await.clone())
    }
}

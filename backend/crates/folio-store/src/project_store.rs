use crate::Result as StoreResult;

use folio_core::ProjectRecord;

use async_trait::async_trait;

/// Persistence seam for project records.
///
/// Handlers only see this trait, so tests can swap the file-backed store
/// for [`crate::InMemoryStore`] or a failing fake.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Append one record after all existing ones.
    async fn append(&self, record: ProjectRecord) -> StoreResult<()>;

    /// All records in submission order.
    async fn list_all(&self) -> StoreResult<Vec<ProjectRecord>>;
}

pub mod error;
pub mod in_memory_store;
pub mod json_file_store;
pub mod project_store;
pub mod stored_upload;
pub mod upload_directory;

#[cfg(test)]
mod tests;

pub use error::{Result, StoreError};
pub use in_memory_store::InMemoryStore;
pub use json_file_store::JsonFileStore;
pub use project_store::ProjectStore;
pub use stored_upload::StoredUpload;
pub use upload_directory::UploadDirectory;

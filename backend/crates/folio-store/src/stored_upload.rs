use std::path::PathBuf;

/// A file written into the uploads directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Generated file name, e.g. `9b1d...e4.png`
    pub file_name: String,
    /// Location on disk
    pub path: PathBuf,
    /// URL path the file is served under, e.g. `/uploads/9b1d...e4.png`
    pub public_url: String,
}

//! Project record - one portfolio entry in the store file.

use serde::{Deserialize, Serialize};

/// A submitted portfolio project.
///
/// `image` is always serialized, as `null` when no image was uploaded.
/// Missing keys deserialize to empty values so records written without
/// a field still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Public URL path of the uploaded image, e.g. `/uploads/3f2c...png`
    #[serde(default)]
    pub image: Option<String>,
}

impl ProjectRecord {
    pub fn new(name: String, description: String, image: Option<String>) -> Self {
        Self {
            name,
            description,
            image,
        }
    }
}

use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DATA_FILE, DEFAULT_MAX_UPLOAD_BYTES,
    DEFAULT_UPLOADS_DIR, DEFAULT_UPLOADS_PUBLIC_PATH, MAX_MAX_UPLOAD_BYTES, MIN_MAX_UPLOAD_BYTES,
    RESERVED_ROUTE_PATHS,
};

use std::path::{Component, Path};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Project store file, relative to the config directory
    pub data_file: String,
    /// Uploaded images, relative to the config directory
    pub uploads_dir: String,
    /// URL prefix the uploads directory is served under
    pub uploads_public_path: String,
    /// Request body cap for submissions
    pub max_upload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: String::from(DEFAULT_DATA_FILE),
            uploads_dir: String::from(DEFAULT_UPLOADS_DIR),
            uploads_public_path: String::from(DEFAULT_UPLOADS_PUBLIC_PATH),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_relative_path("storage.data_file", &self.data_file)
            .map_err(ConfigError::storage)?;
        validate_relative_path("storage.uploads_dir", &self.uploads_dir)
            .map_err(ConfigError::storage)?;

        let public_path = self.uploads_public_path.trim_end_matches('/');
        if !self.uploads_public_path.starts_with('/') || public_path.is_empty() {
            return Err(ConfigError::storage(format!(
                "storage.uploads_public_path must start with '/' and cannot be the root, got '{}'",
                self.uploads_public_path
            )));
        }

        if !public_path
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.'))
            || public_path.contains("//")
            || public_path.split('/').any(|segment| segment == "..")
        {
            return Err(ConfigError::storage(format!(
                "storage.uploads_public_path contains invalid characters: '{}'",
                self.uploads_public_path
            )));
        }

        if let Some(route) = RESERVED_ROUTE_PATHS
            .iter()
            .find(|route| paths_overlap(public_path, route))
        {
            return Err(ConfigError::storage(format!(
                "storage.uploads_public_path '{}' overlaps the {} route",
                self.uploads_public_path, route
            )));
        }

        if self.max_upload_bytes < MIN_MAX_UPLOAD_BYTES
            || self.max_upload_bytes > MAX_MAX_UPLOAD_BYTES
        {
            return Err(ConfigError::storage(format!(
                "storage.max_upload_bytes must be {}-{}, got {}",
                MIN_MAX_UPLOAD_BYTES, MAX_MAX_UPLOAD_BYTES, self.max_upload_bytes
            )));
        }

        Ok(())
    }
}

/// True when one path equals the other or is nested under it
fn paths_overlap(a: &str, b: &str) -> bool {
    let under = |outer: &str, inner: &str| {
        inner
            .strip_prefix(outer)
            .is_some_and(|rest| rest.starts_with('/'))
    };

    a == b || under(a, b) || under(b, a)
}

/// Paths under the config directory must stay inside it.
pub(crate) fn validate_relative_path(field: &str, value: &str) -> Result<(), String> {
    let path = Path::new(value);

    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }

    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if path.is_absolute() || escapes {
        return Err(format!(
            "{field} must be relative and cannot contain '..', got '{value}'"
        ));
    }

    Ok(())
}

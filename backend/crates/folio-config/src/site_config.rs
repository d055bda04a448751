use crate::storage_config::validate_relative_path;
use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Rendered pages served for every route the API does not claim
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site directory, relative to the config directory. None = no site
    pub dir: Option<String>,
}

impl SiteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref dir) = self.dir {
            validate_relative_path("site.dir", dir).map_err(ConfigError::site)?;
        }

        Ok(())
    }
}

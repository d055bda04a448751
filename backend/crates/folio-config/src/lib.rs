mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod site_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use site_config::SiteConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV_VAR: &str = "FOLIO_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".folio";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

/// Paths the server routes itself; uploads cannot be mounted over them
pub const RESERVED_ROUTE_PATHS: &[&str] = &["/api/projects", "/health", "/live", "/ready"];

const DEFAULT_DATA_FILE: &str = "projects.json";
const DEFAULT_UPLOADS_DIR: &str = "uploads";
const DEFAULT_UPLOADS_PUBLIC_PATH: &str = "/uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const MIN_MAX_UPLOAD_BYTES: usize = 1;
const MAX_MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

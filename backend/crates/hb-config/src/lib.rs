mod backend_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod service_config;

#[cfg(test)]
mod tests;

pub use backend_config::{BackendConfig, BackendKind};
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use service_config::ServiceConfig;

const CONFIG_DIR_ENV: &str = "HB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".hb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SERVICE_TIMEOUT_SECS: u64 = 30;
const MIN_SERVICE_TIMEOUT_SECS: u64 = 1;
const MAX_SERVICE_TIMEOUT_SECS: u64 = 300;

use crate::{
    BackendConfig, BackendKind, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig, ServiceConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for HB_CONFIG_DIR env var, else use ./.hb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply HB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HB_CONFIG_DIR env var > ./.hb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;

        match self.backend.kind {
            BackendKind::Service => self.service.validate()?,
            BackendKind::Local => self.database.validate()?,
        }

        Ok(())
    }

    /// Get absolute path to the local database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs keys).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  backend: {}", self.backend.kind);

        match self.backend.kind {
            BackendKind::Service => {
                info!(
                    "  service: {} (anon key: {}, service role key: {}, timeout: {}s)",
                    self.service.url.as_deref().unwrap_or("<unset>"),
                    set_or_unset(&self.service.anon_key),
                    set_or_unset(&self.service.service_role_key),
                    self.service.timeout_secs
                );
            }
            BackendKind::Local => {
                info!(
                    "  database: {} (dev user: {})",
                    self.database.path,
                    self.database.dev_user_id.as_deref().unwrap_or("none")
                );
            }
        }

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("HB_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HB_SERVER_PORT", &mut self.server.port);

        // Backend
        if let Ok(val) = std::env::var("HB_BACKEND") {
            self.backend.kind = val.parse()?;
        }

        // Service
        Self::apply_env_option_string("HB_SERVICE_URL", &mut self.service.url);
        Self::apply_env_option_string("HB_SERVICE_ANON_KEY", &mut self.service.anon_key);
        Self::apply_env_option_string("HB_SERVICE_ROLE_KEY", &mut self.service.service_role_key);
        Self::apply_env_parse("HB_SERVICE_TIMEOUT_SECS", &mut self.service.timeout_secs);

        // Database
        Self::apply_env_string("HB_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_option_string("HB_DEV_USER_ID", &mut self.database.dev_user_id);
        Self::apply_env_option_string("HB_DEV_USER_EMAIL", &mut self.database.dev_user_email);

        // Logging
        Self::apply_env_parse("HB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HB_LOG_FILE", &mut self.logging.file);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

fn set_or_unset(value: &Option<String>) -> &'static str {
    match value {
        Some(v) if !v.trim().is_empty() => "set",
        _ => "unset",
    }
}

use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

/// Local SQLite backend settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config dir
    pub path: String,
    /// Identity used when a request carries no session
    pub dev_user_id: Option<String>,
    pub dev_user_email: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            dev_user_id: None,
            dev_user_email: None,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        self.dev_user_uuid()?;

        Ok(())
    }

    /// Parsed `dev_user_id`, if one is configured
    pub fn dev_user_uuid(&self) -> ConfigErrorResult<Option<Uuid>> {
        self.dev_user_id
            .as_deref()
            .map(|id| {
                Uuid::parse_str(id.trim()).map_err(|e| {
                    ConfigError::database(format!(
                        "database.dev_user_id must be a UUID, got '{id}': {e}"
                    ))
                })
            })
            .transpose()
    }
}

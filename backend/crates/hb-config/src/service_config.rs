use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SERVICE_TIMEOUT_SECS, MAX_SERVICE_TIMEOUT_SECS,
    MIN_SERVICE_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Hosted auth/table service connection.
///
/// `anon_key` is the public key every client sends; `service_role_key`
/// is the privileged key and is only needed for administrative access.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub service_role_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: None,
            anon_key: None,
            service_role_key: None,
            timeout_secs: DEFAULT_SERVICE_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("url", &self.url)
            .field("anon_key", &self.anon_key.as_ref().map(|_| "***"))
            .field("service_role_key", &self.service_role_key.as_ref().map(|_| "***"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ServiceConfig {
    /// Checks needed before any client can be built
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.url()?;
        self.anon_key()?;

        if !(MIN_SERVICE_TIMEOUT_SECS..=MAX_SERVICE_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::service(format!(
                "service.timeout_secs must be {}-{}, got {}",
                MIN_SERVICE_TIMEOUT_SECS, MAX_SERVICE_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn url(&self) -> ConfigErrorResult<&str> {
        let url = non_empty(self.url.as_deref())
            .ok_or_else(|| ConfigError::service("service.url is required"))?;

        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::service(format!(
                "service.url must start with http:// or https://, got '{url}'"
            )));
        }

        Ok(url.trim_end_matches('/'))
    }

    pub fn anon_key(&self) -> ConfigErrorResult<&str> {
        non_empty(self.anon_key.as_deref())
            .ok_or_else(|| ConfigError::service("service.anon_key is required"))
    }

    pub fn service_role_key(&self) -> ConfigErrorResult<&str> {
        non_empty(self.service_role_key.as_deref()).ok_or_else(|| {
            ConfigError::service("service.service_role_key is required for privileged access")
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

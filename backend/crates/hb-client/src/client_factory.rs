use crate::{AccessMode, ClientError, Result as ClientResult, ServiceClient};

use hb_config::ServiceConfig;
use hb_core::SessionToken;

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Url};

/// Builds [`ServiceClient`]s for one hosted project.
///
/// Settings are checked once here; every client handed out afterwards shares
/// the same connection pool.
#[derive(Clone)]
pub struct ClientFactory {
    base_url: Url,
    anon_key: String,
    service_role_key: Option<String>,
    http: ReqwestClient,
}

impl ClientFactory {
    pub fn from_config(config: &ServiceConfig) -> ClientResult<Self> {
        config.validate()?;

        let service_role_key = config.service_role_key().ok().map(String::from);
        Self::new(
            config.url()?,
            config.anon_key()?,
            service_role_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn new(
        base_url: &str,
        anon_key: &str,
        service_role_key: Option<String>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        // Trailing slash so endpoint paths join under any project prefix
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|e| ClientError::url(format!("'{base_url}': {e}")))?;

        let http = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            anon_key: anon_key.to_string(),
            service_role_key,
            http,
        })
    }

    /// Client that acts as nobody in particular
    pub fn anonymous(&self) -> ServiceClient {
        self.build(AccessMode::Anonymous, self.anon_key.clone())
    }

    /// Client that acts as the user holding `token`
    pub fn authenticated(&self, token: SessionToken) -> ServiceClient {
        let bearer = token.as_str().to_string();
        self.build(AccessMode::Authenticated(token), bearer)
    }

    /// Client with the service-role key. Fails when none is configured.
    pub fn privileged(&self) -> ClientResult<ServiceClient> {
        let key = self.service_role_key.clone().ok_or_else(|| {
            ClientError::from(hb_config::ConfigError::service(
                "service.service_role_key is required for privileged access",
            ))
        })?;

        Ok(ServiceClient::new(
            self.http.clone(),
            self.base_url.clone(),
            AccessMode::Privileged,
            key.clone(),
            key,
        ))
    }

    fn build(&self, mode: AccessMode, bearer: String) -> ServiceClient {
        debug!("Opening {} service client", mode);
        ServiceClient::new(
            self.http.clone(),
            self.base_url.clone(),
            mode,
            self.anon_key.clone(),
            bearer,
        )
    }
}

impl std::fmt::Debug for ClientFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientFactory")
            .field("base_url", &self.base_url.as_str())
            .field("service_role_key", &self.service_role_key.as_ref().map(|_| "***"))
            .finish()
    }
}

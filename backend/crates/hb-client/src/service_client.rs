use crate::dto::{
    error_body::ErrorBody, profile_row::ProfileRow, profile_upsert::ProfileUpsert,
    user_response::UserResponse,
};
use crate::{AccessMode, ClientError, Result as ClientResult};

use hb_core::{Handle, Identity, IdentityProvider, Profile, ProfileStore, ServiceResult};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client as ReqwestClient, Method, Response, StatusCode, Url};
use uuid::Uuid;

const AUTH_USER_PATH: &str = "auth/v1/user";
const PROFILES_PATH: &str = "rest/v1/profiles";
const PROFILE_COLUMNS: &str = "id,username,updated_at";

/// Accept header asking the table API for one object instead of an array
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
/// Code the table API uses when a single-object request matched no rows
const NO_ROWS_CODE: &str = "PGRST116";
const UPSERT_PREFERENCE: &str = "resolution=merge-duplicates,return=minimal";

/// HTTP client for the hosted auth and table APIs, fixed to one access mode.
pub struct ServiceClient {
    http: ReqwestClient,
    base_url: Url,
    mode: AccessMode,
    api_key: String,
    bearer: String,
}

impl ServiceClient {
    pub(crate) fn new(
        http: ReqwestClient,
        base_url: Url,
        mode: AccessMode,
        api_key: String,
        bearer: String,
    ) -> Self {
        Self {
            http,
            base_url,
            mode,
            api_key,
            bearer,
        }
    }

    pub fn mode(&self) -> &AccessMode {
        &self.mode
    }

    /// `GET /auth/v1/user`. `None` when the token is missing, expired or revoked.
    pub async fn fetch_user(&self) -> ClientResult<Option<Identity>> {
        if !matches!(self.mode, AccessMode::Authenticated(_)) {
            return Ok(None);
        }

        let url = self.endpoint(AUTH_USER_PATH)?;
        let response = self.request(Method::GET, url).send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!("Access token rejected by auth service");
                Ok(None)
            }
            _ => {
                let user: UserResponse = Self::json(response).await?;
                Ok(Some(Identity::from(user)))
            }
        }
    }

    /// `GET /rest/v1/profiles?id=eq.<id>` as a single object.
    pub async fn fetch_profile(&self, id: Uuid) -> ClientResult<Option<Profile>> {
        let mut url = self.endpoint(PROFILES_PATH)?;
        url.query_pairs_mut()
            .append_pair("select", PROFILE_COLUMNS)
            .append_pair("id", &format!("eq.{id}"));

        let response = self
            .request(Method::GET, url)
            .header(ACCEPT, SINGLE_OBJECT)
            .send()
            .await?;

        match Self::json::<ProfileRow>(response).await {
            Ok(row) => Ok(Some(Profile::from(row))),
            Err(e) if e.code() == Some(NO_ROWS_CODE) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// First profile other than `excluding` whose username equals `username` exactly.
    pub async fn find_profile_by_username(
        &self,
        username: &str,
        excluding: Uuid,
    ) -> ClientResult<Option<Profile>> {
        let mut url = self.endpoint(PROFILES_PATH)?;
        url.query_pairs_mut()
            .append_pair("select", PROFILE_COLUMNS)
            .append_pair("username", &format!("eq.{username}"))
            .append_pair("id", &format!("neq.{excluding}"))
            .append_pair("limit", "1");

        let response = self.request(Method::GET, url).send().await?;
        let rows: Vec<ProfileRow> = Self::json(response).await?;

        Ok(rows.into_iter().next().map(Profile::from))
    }

    /// `POST /rest/v1/profiles?on_conflict=id` merging into any existing row.
    pub async fn upsert_profile_row(
        &self,
        id: Uuid,
        username: &str,
        updated_at: DateTime<Utc>,
    ) -> ClientResult<()> {
        let mut url = self.endpoint(PROFILES_PATH)?;
        url.query_pairs_mut().append_pair("on_conflict", "id");

        let body = ProfileUpsert {
            id,
            username,
            updated_at,
        };

        let response = self
            .request(Method::POST, url)
            .header("Prefer", UPSERT_PREFERENCE)
            .json(&body)
            .send()
            .await?;

        Self::check(response).await.map(|_| ())
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::url(format!("{path}: {e}")))
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer))
    }

    /// Turn non-2xx responses into `ClientError::Api`
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await?;
        let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
        let code = body.code().unwrap_or_else(|| status.as_u16().to_string());
        let message = body
            .message()
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

        warn!("Service returned {}: {} ({})", status, message, code);
        Err(ClientError::api_error(status.as_u16(), code, message))
    }

    async fn json<T: serde::de::DeserializeOwned>(response: Response) -> ClientResult<T> {
        let response = Self::check(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("base_url", &self.base_url.as_str())
            .field("mode", &self.mode)
            .finish()
    }
}

#[async_trait]
impl IdentityProvider for ServiceClient {
    async fn current_identity(&self) -> ServiceResult<Option<Identity>> {
        Ok(self.fetch_user().await?)
    }
}

#[async_trait]
impl ProfileStore for ServiceClient {
    async fn get_profile(&self, identity_id: Uuid) -> ServiceResult<Option<Profile>> {
        Ok(self.fetch_profile(identity_id).await?)
    }

    async fn find_profile_by_handle(
        &self,
        handle: &Handle,
        excluding_identity_id: Uuid,
    ) -> ServiceResult<Option<Profile>> {
        Ok(self
            .find_profile_by_username(handle.as_str(), excluding_identity_id)
            .await?)
    }

    async fn upsert_profile(
        &self,
        identity_id: Uuid,
        handle: &Handle,
        modified_at: DateTime<Utc>,
    ) -> ServiceResult<()> {
        Ok(self
            .upsert_profile_row(identity_id, handle.as_str(), modified_at)
            .await?)
    }
}

use crate::{Handle, Profile, ServiceResult};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Row access for the `profiles` table.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// `Ok(None)` when the identity has no profile row yet.
    async fn get_profile(&self, identity_id: Uuid) -> ServiceResult<Option<Profile>>;

    /// Any profile other than `excluding_identity_id` holding exactly `handle`.
    async fn find_profile_by_handle(
        &self,
        handle: &Handle,
        excluding_identity_id: Uuid,
    ) -> ServiceResult<Option<Profile>>;

    /// Insert or update the profile keyed by `identity_id`.
    async fn upsert_profile(
        &self,
        identity_id: Uuid,
        handle: &Handle,
        modified_at: DateTime<Utc>,
    ) -> ServiceResult<()>;
}

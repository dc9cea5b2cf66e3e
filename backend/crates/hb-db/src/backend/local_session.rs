use crate::{ProfileRepository, UserRepository};

use hb_core::{Handle, Identity, IdentityProvider, Profile, ProfileStore, ServiceResult};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// One request's view of the local database, bound to a user id (or nobody).
pub struct LocalSession {
    user_id: Option<Uuid>,
    users: UserRepository,
    profiles: ProfileRepository,
}

impl LocalSession {
    pub fn new(pool: SqlitePool, user_id: Option<Uuid>) -> Self {
        Self {
            user_id,
            users: UserRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }
}

#[async_trait]
impl IdentityProvider for LocalSession {
    async fn current_identity(&self) -> ServiceResult<Option<Identity>> {
        let Some(user_id) = self.user_id else {
            return Ok(None);
        };

        Ok(self.users.find_by_id(user_id).await?)
    }
}

#[async_trait]
impl ProfileStore for LocalSession {
    async fn get_profile(&self, identity_id: Uuid) -> ServiceResult<Option<Profile>> {
        Ok(self.profiles.find_by_id(identity_id).await?)
    }

    async fn find_profile_by_handle(
        &self,
        handle: &Handle,
        excluding_identity_id: Uuid,
    ) -> ServiceResult<Option<Profile>> {
        Ok(self
            .profiles
            .find_by_username_excluding(handle.as_str(), excluding_identity_id)
            .await?)
    }

    async fn upsert_profile(
        &self,
        identity_id: Uuid,
        handle: &Handle,
        modified_at: DateTime<Utc>,
    ) -> ServiceResult<()> {
        Ok(self
            .profiles
            .upsert(identity_id, handle.as_str(), modified_at)
            .await?)
    }
}

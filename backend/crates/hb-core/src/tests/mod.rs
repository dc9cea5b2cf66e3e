mod account;

use crate::{
    Handle, Identity, IdentityProvider, Profile, ProfileStore, ServiceError, ServiceResult,
};

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub(crate) fn identity(email: Option<&str>) -> Identity {
    Identity::new(
        Uuid::new_v4(),
        email.map(String::from),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    )
}

/// In-memory stand-in for the hosted service
#[derive(Default)]
pub(crate) struct FakeService {
    pub identity: Option<Identity>,
    pub profiles: Mutex<HashMap<Uuid, Profile>>,
    pub identity_error: Option<String>,
    pub get_error: Option<String>,
    pub find_error: Option<String>,
    pub upsert_error: Option<ServiceError>,
    pub lookups: AtomicUsize,
    pub writes: AtomicUsize,
}

impl FakeService {
    pub(crate) fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            ..Default::default()
        }
    }

    pub(crate) fn with_profile(self, id: Uuid, username: &str) -> Self {
        self.profiles.lock().unwrap().insert(
            id,
            Profile::new(id, Some(username.to_string()), Some(Utc::now())),
        );
        self
    }

    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub(crate) fn profile(&self, id: Uuid) -> Option<Profile> {
        self.profiles.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl IdentityProvider for FakeService {
    async fn current_identity(&self) -> ServiceResult<Option<Identity>> {
        match &self.identity_error {
            Some(message) => Err(ServiceError::request(message.clone())),
            None => Ok(self.identity.clone()),
        }
    }
}

#[async_trait]
impl ProfileStore for FakeService {
    async fn get_profile(&self, identity_id: Uuid) -> ServiceResult<Option<Profile>> {
        if let Some(message) = &self.get_error {
            return Err(ServiceError::request(message.clone()));
        }
        Ok(self.profile(identity_id))
    }

    async fn find_profile_by_handle(
        &self,
        handle: &Handle,
        excluding_identity_id: Uuid,
    ) -> ServiceResult<Option<Profile>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.find_error {
            return Err(ServiceError::request(message.clone()));
        }
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .find(|p| p.id != excluding_identity_id && p.handle() == Some(handle.as_str()))
            .cloned())
    }

    async fn upsert_profile(
        &self,
        identity_id: Uuid,
        handle: &Handle,
        modified_at: DateTime<Utc>,
    ) -> ServiceResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.upsert_error {
            return Err(match e {
                ServiceError::Rejected { code, message, .. } => {
                    ServiceError::rejected(code.clone(), message.clone())
                }
                other => ServiceError::request(other.to_string()),
            });
        }
        self.profiles.lock().unwrap().insert(
            identity_id,
            Profile::new(identity_id, Some(handle.to_string()), Some(modified_at)),
        );
        Ok(())
    }
}

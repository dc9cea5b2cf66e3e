//! Username claim workflow.
//!
//! Validate locally, ask the store whether another identity already holds
//! the handle, then upsert. The check and the write are two separate remote
//! calls with nothing held in between, so two identities racing for the same
//! new handle can both pass the check. Whatever uniqueness constraint the
//! store has decides that race; the workflow does not lock.

use crate::{
    AccountError, ClaimPhase, Handle, Identity, ProfileStore, Result as AccountResult,
};

use chrono::Utc;
use log::{debug, error, info, warn};

/// One username submission against a profile store.
pub struct UsernameClaim<'a, S: ProfileStore + ?Sized> {
    store: &'a S,
    trail: Vec<ClaimPhase>,
}

impl<'a, S: ProfileStore + ?Sized> UsernameClaim<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            trail: vec![ClaimPhase::Idle],
        }
    }

    pub fn phase(&self) -> ClaimPhase {
        self.trail.last().copied().unwrap_or_default()
    }

    /// Every phase the last submission passed through, starting at `Idle`
    pub fn trail(&self) -> &[ClaimPhase] {
        &self.trail
    }

    /// Run the whole claim for `candidate` on behalf of `identity`.
    ///
    /// Returns the trimmed handle that was written. Each call starts over
    /// from `Idle`; nothing carries across submissions.
    pub async fn submit(
        &mut self,
        identity: Option<&Identity>,
        candidate: &str,
    ) -> AccountResult<Handle> {
        self.trail.clear();
        self.trail.push(ClaimPhase::Idle);

        let result = self.run(identity, candidate).await;

        match &result {
            Ok(handle) => {
                self.advance(ClaimPhase::Succeeded);
                info!("Username claimed: {}", handle);
            }
            Err(e) => {
                self.advance(ClaimPhase::Failed);
                if e.is_validation() {
                    debug!("Username rejected: {}", e);
                } else {
                    warn!("Username claim failed: {}", e);
                }
            }
        }

        result
    }

    async fn run(&mut self, identity: Option<&Identity>, candidate: &str) -> AccountResult<Handle> {
        self.advance(ClaimPhase::Validating);
        let identity = identity.ok_or_else(AccountError::unauthenticated)?;
        let handle = Handle::parse(candidate)?;

        self.advance(ClaimPhase::Checking);
        match self.store.find_profile_by_handle(&handle, identity.id).await {
            Ok(Some(existing)) => {
                info!(
                    "Username {} requested by {} is held by {}",
                    handle, identity.id, existing.id
                );
                return Err(AccountError::handle_taken(handle.as_str()));
            }
            Ok(None) => {}
            // The write below still hits the store's own constraint
            Err(e) => warn!("Username availability check failed for {}: {}", handle, e),
        }

        self.advance(ClaimPhase::Writing);
        self.store
            .upsert_profile(identity.id, &handle, Utc::now())
            .await
            .map_err(|e| {
                error!("Error updating username for {}: {}", identity.id, e);
                AccountError::write_failed(&e)
            })?;

        Ok(handle)
    }

    fn advance(&mut self, next: ClaimPhase) {
        debug!("username claim: {} -> {}", self.phase(), next);
        self.trail.push(next);
    }
}

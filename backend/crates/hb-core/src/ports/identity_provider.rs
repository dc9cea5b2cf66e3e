use crate::{Identity, ServiceResult};

use async_trait::async_trait;

/// Resolves who is signed in for the current session.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` means nobody is signed in; that is not an error.
    async fn current_identity(&self) -> ServiceResult<Option<Identity>>;
}

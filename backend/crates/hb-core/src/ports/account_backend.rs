use crate::{IdentityProvider, ProfileStore, SessionToken};

/// Identity lookup and profile storage bound to one session.
pub trait AccountSession: IdentityProvider + ProfileStore {}

impl<T: IdentityProvider + ProfileStore> AccountSession for T {}

/// Opens per-request sessions against whichever store the server runs with.
pub trait AccountBackend: Send + Sync {
    /// Short name for logs and the readiness probe (e.g. "service", "local")
    fn kind(&self) -> &'static str;

    /// Open a session. `None` yields an anonymous session.
    fn session(&self, token: Option<&SessionToken>) -> Box<dyn AccountSession>;
}

use crate::ClientFactory;

use hb_core::{AccountBackend, AccountSession, SessionToken};

/// Account backend over the hosted service.
///
/// Requests with a session token get an authenticated client; the rest get
/// an anonymous one, which never resolves an identity.
pub struct ServiceBackend {
    factory: ClientFactory,
}

impl ServiceBackend {
    pub fn new(factory: ClientFactory) -> Self {
        Self { factory }
    }
}

impl AccountBackend for ServiceBackend {
    fn kind(&self) -> &'static str {
        "service"
    }

    fn session(&self, token: Option<&SessionToken>) -> Box<dyn AccountSession> {
        match token {
            Some(token) => Box::new(self.factory.authenticated(token.clone())),
            None => Box::new(self.factory.anonymous()),
        }
    }
}

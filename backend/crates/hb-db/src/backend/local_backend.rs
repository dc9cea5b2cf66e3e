use crate::{LocalSession, Result as DbErrorResult, UserRepository};

use hb_core::{AccountBackend, AccountSession, Identity, SessionToken};

use chrono::Utc;
use log::{debug, info};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Account backend over the local SQLite file.
///
/// A session token is the user's id. Requests without a token act as the
/// configured dev user, if there is one.
pub struct LocalBackend {
    pool: SqlitePool,
    dev_user: Option<Uuid>,
}

impl LocalBackend {
    pub fn new(pool: SqlitePool, dev_user: Option<Uuid>) -> Self {
        Self { pool, dev_user }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Make sure the dev user row exists so it can sign in on first start.
    pub async fn ensure_dev_user(&self, email: Option<&str>) -> DbErrorResult<()> {
        let Some(id) = self.dev_user else {
            return Ok(());
        };

        let identity = Identity::new(id, email.map(String::from), Utc::now());
        if UserRepository::new(self.pool.clone()).ensure(&identity).await? {
            info!("Created dev user: {}", id);
        }

        Ok(())
    }

    fn resolve_user(&self, token: Option<&SessionToken>) -> Option<Uuid> {
        match token {
            Some(token) => match Uuid::parse_str(token.as_str()) {
                Ok(id) => Some(id),
                Err(_) => {
                    debug!("Session token is not a local user id");
                    None
                }
            },
            None => self.dev_user,
        }
    }
}

impl AccountBackend for LocalBackend {
    fn kind(&self) -> &'static str {
        "local"
    }

    fn session(&self, token: Option<&SessionToken>) -> Box<dyn AccountSession> {
        Box::new(LocalSession::new(self.pool.clone(), self.resolve_user(token)))
    }
}

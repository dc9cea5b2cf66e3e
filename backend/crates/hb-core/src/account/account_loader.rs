//! Account loader: runs once when the account view is opened.

use crate::{
    AccountError, AccountSession, Identity, IdentityProvider, Profile, ProfileStore,
    Result as AccountResult, StatusMessage,
};

use log::{debug, error};

/// Everything the account view needs once someone is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountView {
    pub identity: Identity,
    pub profile: Option<Profile>,
    /// Initial value of the editable username field
    pub handle: String,
    pub message: Option<StatusMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nobody is signed in; the view shows a log-in prompt
    SignedOut { message: Option<StatusMessage> },
    Loaded(AccountView),
}

impl LoadOutcome {
    pub fn view(&self) -> Option<&AccountView> {
        match self {
            Self::Loaded(view) => Some(view),
            Self::SignedOut { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        match self {
            Self::Loaded(view) => view.message.as_ref(),
            Self::SignedOut { message } => message.as_ref(),
        }
    }
}

pub struct AccountLoader<'a, S: ProfileStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: ProfileStore + ?Sized> AccountLoader<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Build the view for an already-resolved identity.
    ///
    /// A missing profile is normal for new accounts. Any other fetch error
    /// is logged and reported through the view's message, but the view is
    /// still returned with a default username.
    pub async fn load(&self, identity: Option<Identity>) -> LoadOutcome {
        let Some(identity) = identity else {
            debug!("Account view opened without a session");
            return LoadOutcome::SignedOut { message: None };
        };

        let (profile, message) = match self.store.get_profile(identity.id).await {
            Ok(profile) => (profile, None),
            Err(e) => {
                let err = AccountError::load_failed(&e);
                error!("Error loading profile for {}: {}", identity.id, err);
                (None, Some(StatusMessage::from(&err)))
            }
        };

        let handle = profile
            .as_ref()
            .and_then(Profile::handle)
            .map(String::from)
            .unwrap_or_else(|| identity.default_handle());

        LoadOutcome::Loaded(AccountView {
            identity,
            profile,
            handle,
            message,
        })
    }
}

impl<'a, S: AccountSession + ?Sized> AccountLoader<'a, S> {
    /// Resolve the session's identity, then [`load`](Self::load) it.
    pub async fn activate(&self) -> LoadOutcome {
        match resolve_identity(self.store).await {
            Ok(identity) => self.load(identity).await,
            Err(e) => LoadOutcome::SignedOut {
                message: Some(StatusMessage::from(&e)),
            },
        }
    }
}

/// Ask the provider who is signed in, turning provider failures into `LoadFailed`.
pub async fn resolve_identity<P: IdentityProvider + ?Sized>(
    provider: &P,
) -> AccountResult<Option<Identity>> {
    provider.current_identity().await.map_err(|e| {
        let err = AccountError::load_failed(&e);
        error!("Error loading user: {}", err);
        err
    })
}

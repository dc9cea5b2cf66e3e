use crate::{
    AccountView, ClaimPhase, Handle, Identity, ProfileStore, Result as AccountResult,
    StatusMessage, UsernameClaim,
};

/// Editable state behind the account view: the username field and the
/// status message box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountForm {
    handle: String,
    message: Option<StatusMessage>,
    phase: ClaimPhase,
}

impl AccountForm {
    pub fn new<S: Into<String>>(handle: S) -> Self {
        Self {
            handle: handle.into(),
            message: None,
            phase: ClaimPhase::Idle,
        }
    }

    pub fn from_view(view: &AccountView) -> Self {
        Self {
            handle: view.handle.clone(),
            message: view.message.clone(),
            phase: ClaimPhase::Idle,
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn phase(&self) -> ClaimPhase {
        self.phase
    }

    /// User typed into the username field
    pub fn edit<S: Into<String>>(&mut self, value: S) {
        self.handle = value.into();
        self.phase = ClaimPhase::Idle;
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// Submit the current field value as a username claim.
    pub async fn submit<S: ProfileStore + ?Sized>(
        &mut self,
        store: &S,
        identity: Option<&Identity>,
    ) -> AccountResult<Handle> {
        self.message = None;

        let mut claim = UsernameClaim::new(store);
        let result = claim.submit(identity, &self.handle).await;
        self.phase = claim.phase();

        match &result {
            Ok(handle) => {
                self.handle = handle.to_string();
                self.message = Some(StatusMessage::username_updated());
            }
            Err(e) => self.message = Some(StatusMessage::from(e)),
        }

        result
    }
}

use crate::{AccountError, MessageKind, SUCCESS_MESSAGE};

use serde::{Deserialize, Serialize};

/// Dismissible message shown above the account form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success<S: Into<String>>(text: S) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error<S: Into<String>>(text: S) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn username_updated() -> Self {
        Self::success(SUCCESS_MESSAGE)
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

impl From<&AccountError> for StatusMessage {
    fn from(error: &AccountError) -> Self {
        Self::error(error.user_message())
    }
}

//! Handle - the public, unique username a profile claims.

use crate::{AccountError, MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH, Result as AccountResult};

use serde::{Deserialize, Serialize};

/// A validated username.
///
/// Only constructible through [`Handle::parse`] (deserializing goes through it
/// too), so holding one means the candidate passed every local rule.
/// Uniqueness is a separate, remote check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    /// Validate a user-edited candidate.
    ///
    /// Rules run in order and the first failure wins: trimmed value must be
    /// non-empty, the untrimmed length must be within
    /// `MIN_HANDLE_LENGTH..=MAX_HANDLE_LENGTH`, and every untrimmed character
    /// must be ASCII alphanumeric, `_` or `-`. The stored value is trimmed.
    #[track_caller]
    pub fn parse(candidate: &str) -> AccountResult<Self> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(AccountError::empty_handle());
        }

        let length = candidate.chars().count();
        if length < MIN_HANDLE_LENGTH {
            return Err(AccountError::too_short(length));
        }
        if length > MAX_HANDLE_LENGTH {
            return Err(AccountError::too_long(length));
        }

        if !candidate.chars().all(Self::is_allowed_char) {
            return Err(AccountError::invalid_characters(candidate));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn is_allowed_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '-'
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Handle {
    type Error = AccountError;

    fn try_from(value: String) -> AccountResult<Self> {
        Self::parse(&value)
    }
}

impl From<Handle> for String {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

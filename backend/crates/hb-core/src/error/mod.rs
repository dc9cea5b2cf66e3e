pub mod service_error;

// -------------------------------------------------------------------------- //

use crate::{
    LOAD_FAILED_MESSAGE, MAX_HANDLE_LENGTH, MIN_HANDLE_LENGTH, ServiceError, WRITE_RETRY_MESSAGE,
};

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Every way loading an account or claiming a username can fail.
///
/// None of these are fatal to the view: callers turn them into a
/// [`StatusMessage`](crate::StatusMessage) and let the user retry.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Not signed in {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("Username is empty {location}")]
    EmptyHandle { location: ErrorLocation },

    #[error("Username too short: {length} characters {location}")]
    TooShort {
        length: usize,
        location: ErrorLocation,
    },

    #[error("Username too long: {length} characters {location}")]
    TooLong {
        length: usize,
        location: ErrorLocation,
    },

    #[error("Username contains invalid characters: {candidate:?} {location}")]
    InvalidCharacters {
        candidate: String,
        location: ErrorLocation,
    },

    #[error("Username already taken: {handle} {location}")]
    HandleTaken {
        handle: String,
        location: ErrorLocation,
    },

    #[error("Profile write failed: {message:?} {location}")]
    WriteFailed {
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("Profile load failed: {message} {location}")]
    LoadFailed {
        message: String,
        location: ErrorLocation,
    },
}

impl AccountError {
    #[track_caller]
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_handle() -> Self {
        Self::EmptyHandle {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn too_short(length: usize) -> Self {
        Self::TooShort {
            length,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn too_long(length: usize) -> Self {
        Self::TooLong {
            length,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_characters<S: Into<String>>(candidate: S) -> Self {
        Self::InvalidCharacters {
            candidate: candidate.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn handle_taken<S: Into<String>>(handle: S) -> Self {
        Self::HandleTaken {
            handle: handle.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a failed upsert, keeping the service's own message when it gave one
    #[track_caller]
    pub fn write_failed(source: &ServiceError) -> Self {
        Self::WriteFailed {
            message: source.user_message().map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn load_failed(source: &ServiceError) -> Self {
        Self::LoadFailed {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Machine-readable code used by the JSON API
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated { .. } => "UNAUTHENTICATED",
            Self::EmptyHandle { .. } => "EMPTY_HANDLE",
            Self::TooShort { .. } => "TOO_SHORT",
            Self::TooLong { .. } => "TOO_LONG",
            Self::InvalidCharacters { .. } => "INVALID_CHARACTERS",
            Self::HandleTaken { .. } => "HANDLE_TAKEN",
            Self::WriteFailed { .. } => "WRITE_FAILED",
            Self::LoadFailed { .. } => "LOAD_FAILED",
        }
    }

    /// True for the rules checked before any remote call is made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyHandle { .. }
                | Self::TooShort { .. }
                | Self::TooLong { .. }
                | Self::InvalidCharacters { .. }
        )
    }

    /// Form field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmptyHandle { .. }
            | Self::TooShort { .. }
            | Self::TooLong { .. }
            | Self::InvalidCharacters { .. }
            | Self::HandleTaken { .. } => Some("username"),
            _ => None,
        }
    }

    /// Text shown to the user in the status message box
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthenticated { .. } => "You must be logged in".to_string(),
            Self::EmptyHandle { .. } => "Username cannot be empty".to_string(),
            Self::TooShort { .. } => {
                format!("Username must be at least {MIN_HANDLE_LENGTH} characters")
            }
            Self::TooLong { .. } => {
                format!("Username must be less than {MAX_HANDLE_LENGTH} characters")
            }
            Self::InvalidCharacters { .. } => {
                "Username can only contain letters, numbers, underscores, and hyphens".to_string()
            }
            Self::HandleTaken { .. } => "This username is already taken".to_string(),
            Self::WriteFailed { message, .. } => message
                .clone()
                .unwrap_or_else(|| WRITE_RETRY_MESSAGE.to_string()),
            Self::LoadFailed { .. } => LOAD_FAILED_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, AccountError>;

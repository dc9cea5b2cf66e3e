use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure reported by the auth/table collaborator.
///
/// Backends convert their own error types into this so the account
/// workflows never depend on a particular transport.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Service request failed: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    #[error("Service rejected request: {message} (code: {code}) {location}")]
    Rejected {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid data from service: {message} {location}")]
    InvalidData {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn request<S: Into<String>>(message: S) -> Self {
        Self::Request {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rejected<C: Into<String>, S: Into<String>>(code: C, message: S) -> Self {
        Self::Rejected {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message the service itself attached, suitable for showing to users.
    ///
    /// Transport and decoding failures have none.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

pub type ServiceResult<T> = StdResult<T, ServiceError>;

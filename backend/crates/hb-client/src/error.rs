use hb_config::ConfigError;
use hb_core::ServiceError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur talking to the hosted service
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },

    #[error("Client configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error<C: Into<String>, M: Into<String>>(status: u16, code: C, message: M) -> Self {
        ClientError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn url<S: Into<String>>(message: S) -> Self {
        ClientError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Error code reported by the service, if this is an API error
    pub fn code(&self) -> Option<&str> {
        match self {
            ClientError::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ClientError> for ServiceError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api { code, message, .. } => ServiceError::rejected(code, message),
            ClientError::Json { .. } => ServiceError::invalid_data(err.to_string()),
            _ => ServiceError::request(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

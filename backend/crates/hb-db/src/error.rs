use hb_core::ServiceError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// SQLSTATE reported for unique constraint violations
const UNIQUE_VIOLATION_CODE: &str = "23505";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row in {table}: {message} {location}")]
    InvalidRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn invalid_row<S: Into<String>>(table: &'static str, message: S) -> Self {
        Self::InvalidRow {
            table,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the statement broke a UNIQUE constraint
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx { source, .. } => source
                .as_database_error()
                .is_some_and(|e| e.is_unique_violation()),
            _ => false,
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ServiceError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        if err.is_unique_violation() {
            return ServiceError::rejected(
                UNIQUE_VIOLATION_CODE,
                "duplicate key value violates unique constraint \"profiles_username_key\"",
            );
        }

        match err {
            DbError::InvalidRow { .. } => ServiceError::invalid_data(err.to_string()),
            _ => ServiceError::request(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;

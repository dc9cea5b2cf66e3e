pub mod profile_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use uuid::Uuid;

fn parse_uuid(table: &'static str, column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| {
        DbError::invalid_row(table, format!("Invalid UUID in {table}.{column}: {e}"))
    })
}

fn from_millis(table: &'static str, column: &str, millis: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        DbError::invalid_row(table, format!("Invalid timestamp in {table}.{column}"))
    })
}

pub mod error_body;
pub mod profile_row;
pub mod profile_upsert;
pub mod user_response;

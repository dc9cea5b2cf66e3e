pub mod handle;
pub mod identity;
pub mod message_kind;
pub mod profile;
pub mod session_token;
pub mod status_message;

pub mod account;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests;

pub use account::account_form::AccountForm;
pub use account::account_loader::{AccountLoader, AccountView, LoadOutcome, resolve_identity};
pub use account::claim_phase::ClaimPhase;
pub use account::username_claim::UsernameClaim;
pub use error::service_error::{ServiceError, ServiceResult};
pub use error::{AccountError, Result};
pub use models::handle::Handle;
pub use models::identity::Identity;
pub use models::message_kind::MessageKind;
pub use models::profile::Profile;
pub use models::session_token::SessionToken;
pub use models::status_message::StatusMessage;
pub use ports::account_backend::{AccountBackend, AccountSession};
pub use ports::identity_provider::IdentityProvider;
pub use ports::profile_store::ProfileStore;

/// Shortest accepted username, counted before trimming
pub const MIN_HANDLE_LENGTH: usize = 3;
/// Longest accepted username, counted before trimming
pub const MAX_HANDLE_LENGTH: usize = 30;
/// Default username when the email has no usable local part
pub const FALLBACK_HANDLE: &str = "user";

pub const SUCCESS_MESSAGE: &str = "Username updated successfully!";
pub const WRITE_RETRY_MESSAGE: &str = "Failed to update username. Please try again.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load profile";

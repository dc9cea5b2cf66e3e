pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;
pub mod views;

#[cfg(test)]
mod tests;

pub use api::{
    account::{
        account::{get_account, update_username},
        account_response::AccountResponse,
        update_username_request::UpdateUsernameRequest,
        update_username_response::UpdateUsernameResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::session::{SESSION_COOKIE, Session},
};
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use state::AppState;

pub mod account;
pub mod account_response;
pub mod update_username_request;
pub mod update_username_response;

//! Client for the hosted auth/table service.
//!
//! [`ClientFactory`] hands out [`ServiceClient`]s in one of three access
//! modes; [`ServiceBackend`] plugs them into the account workflows.

pub mod access_mode;
pub mod client_factory;
pub mod dto;
pub mod error;
pub mod service_backend;
pub mod service_client;


pub use access_mode::AccessMode;
pub use client_factory::ClientFactory;
pub use error::{ClientError, Result};
pub use service_backend::ServiceBackend;
pub use service_client::ServiceClient;

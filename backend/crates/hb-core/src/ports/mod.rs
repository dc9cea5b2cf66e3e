//! Seams to the hosted auth/table service.
//!
//! The account workflows only ever talk to these traits; `hb-client`
//! implements them over HTTP and `hb-db` over a local SQLite file.

pub mod account_backend;
pub mod identity_provider;
pub mod profile_store;

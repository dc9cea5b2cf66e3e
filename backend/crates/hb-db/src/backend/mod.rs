pub mod local_backend;
pub mod local_session;

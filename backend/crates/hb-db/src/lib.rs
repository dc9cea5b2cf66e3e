pub mod backend;
pub mod connection;
pub mod error;
pub mod repositories;

pub use backend::local_backend::LocalBackend;
pub use backend::local_session::LocalSession;
pub use connection::database::{migrate, open, open_in_memory};
pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_repository::UserRepository;

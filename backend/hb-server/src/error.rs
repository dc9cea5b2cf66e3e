use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] hb_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] hb_db::DbError),

    #[error("Service client error: {0}")]
    Client(#[from] hb_client::ClientError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

use hb_core::StatusMessage;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UpdateUsernameResponse {
    /// The trimmed username that was stored
    pub username: String,
    pub message: StatusMessage,
}

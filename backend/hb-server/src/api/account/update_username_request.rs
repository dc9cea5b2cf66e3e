use serde::Deserialize;

/// Body of PUT /api/account/username and of the account page form
#[derive(Debug, Deserialize)]
pub struct UpdateUsernameRequest {
    /// Candidate exactly as typed; validation happens in the claim
    #[serde(default)]
    pub username: String,
}

use hb_core::SessionToken;

/// Which credentials a [`ServiceClient`](crate::ServiceClient) sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessMode {
    /// Public key only; row-level security sees no user
    Anonymous,
    /// Public key plus the signed-in user's access token
    Authenticated(SessionToken),
    /// Service-role key; bypasses row-level security
    Privileged,
}

impl AccessMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Authenticated(_) => "authenticated",
            Self::Privileged => "privileged",
        }
    }
}

impl std::fmt::Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

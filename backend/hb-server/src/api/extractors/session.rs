//! Axum extractor for the caller's session token

use hb_core::SessionToken;

use std::convert::Infallible;
use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{
        HeaderMap,
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
    },
};

/// Cookie carrying the access token for browser requests
pub const SESSION_COOKIE: &str = "hb-access-token";

/// The request's access token, if it sent one
///
/// Checks `Authorization: Bearer <token>` first, then the
/// `hb-access-token` cookie. A missing or blank token is not an error;
/// the backend decides what an anonymous session may see.
#[derive(Debug, Clone, Default)]
pub struct Session(pub Option<SessionToken>);

impl Session {
    pub fn token(&self) -> Option<&SessionToken> {
        self.0.as_ref()
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        Session(bearer_token(headers).or_else(|| cookie_token(headers)))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { Ok(Session::from_headers(&parts.headers)) }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        log::debug!("Ignoring non-bearer Authorization header");
        return None;
    }

    SessionToken::new(token)
}

fn cookie_token(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, token)| SessionToken::new(token))
}

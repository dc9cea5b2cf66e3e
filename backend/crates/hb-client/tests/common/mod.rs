#![allow(dead_code)]

use hb_client::ClientFactory;

use std::time::Duration;

use wiremock::MockServer;

pub const ANON_KEY: &str = "test-anon-key";
pub const ROLE_KEY: &str = "test-role-key";
pub const USER_TOKEN: &str = "test-user-token";

/// Mock service plus a factory pointed at it
pub async fn start() -> (MockServer, ClientFactory) {
    let server = MockServer::start().await;
    let factory = ClientFactory::new(
        &server.uri(),
        ANON_KEY,
        Some(ROLE_KEY.to_string()),
        Duration::from_secs(5),
    )
    .expect("Failed to build client factory");
    (server, factory)
}

pub fn user_token() -> hb_core::SessionToken {
    hb_core::SessionToken::new(USER_TOKEN).expect("token is not blank")
}

//! Shared setup for the mock-server tests.

use std::time::Duration;

use lastfm::{ClientConfig, LastFm};
use wiremock::MockServer;

pub const API_KEY: &str = "test_api_key";

/// Endpoint path the client is pointed at on the mock server.
pub const API_PATH: &str = "/2.0/";

/// Client talking to `server` with a short rate limit.
pub fn client(server: &MockServer) -> LastFm {
    client_with_rate_limit(server, Duration::from_millis(10))
}

pub fn client_with_rate_limit(server: &MockServer, rate_limit: Duration) -> LastFm {
    let config = ClientConfig::default()
        .with_api_url(format!("{}{}", server.uri(), API_PATH))
        .with_rate_limit(rate_limit);
    LastFm::with_config(API_KEY, config).expect("client should build")
}

//! HTTP requestor.
//!
//! Issues rate-limited GET requests against fully built query URLs and
//! returns the parsed JSON body.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use super::rate_limit::RateLimiter;
use crate::config::ClientConfig;
use crate::error::{LastfmError, Result};

/// Performs the actual HTTP calls.
///
/// Idle connections are not kept, so every call opens its own connection
/// and releases it once the body has been read.
#[derive(Debug, Clone)]
pub struct Requestor {
    client: Client,
    rate_limiter: RateLimiter,
}

impl Requestor {
    /// Build a requestor from a config with a fresh rate limiter.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_rate_limiter(config, RateLimiter::new(config.rate_limit))
    }

    /// Build a requestor that shares an existing rate limiter.
    pub fn with_rate_limiter(config: &ClientConfig, rate_limiter: RateLimiter) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(0);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            rate_limiter,
        })
    }

    /// The gate this requestor waits on.
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// Fails on any status other than `200 OK`. The rate limiter is stamped
    /// only once a `200` response has arrived.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        self.rate_limiter.wait().await;

        debug!("GET {}", redact_api_key(url));
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%status, "Last.fm request failed");
            return Err(LastfmError::UnexpectedStatus {
                status,
                url: redact_api_key(url),
            });
        }
        self.rate_limiter.record().await;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Replace the value of `api_key` in a query URL.
fn redact_api_key(url: &str) -> String {
    let Some(start) = url.find("api_key=").map(|i| i + "api_key=".len()) else {
        return url.to_string();
    };
    let end = url[start..].find('&').map_or(url.len(), |i| start + i);
    format!("{}[REDACTED]{}", &url[..start], &url[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_api_key_in_middle() {
        let url = "https://x/?&api_key=secret&format=json";
        assert_eq!(redact_api_key(url), "https://x/?&api_key=[REDACTED]&format=json");
    }

    #[test]
    fn test_redact_api_key_at_end() {
        assert_eq!(redact_api_key("?&api_key=secret"), "?&api_key=[REDACTED]");
    }

    #[test]
    fn test_redact_without_key() {
        assert_eq!(redact_api_key("?&format=json"), "?&format=json");
    }

    #[test]
    fn test_requestor_uses_configured_threshold() {
        let config = ClientConfig::default();
        let requestor = Requestor::new(&config).unwrap();
        assert_eq!(requestor.rate_limiter().threshold(), config.rate_limit);
    }
}

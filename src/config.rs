//! Client configuration.

use std::time::Duration;

/// Default Last.fm API endpoint.
pub const DEFAULT_API_URL: &str = "https://ws.audioscrobbler.com/2.0/";

/// Default minimum spacing between two outbound calls.
pub const DEFAULT_RATE_LIMIT: Duration = Duration::from_millis(200);

/// User agent sent with every request.
const USER_AGENT: &str = concat!("lastfm/", env!("CARGO_PKG_VERSION"));

/// Settings shared by every query object handed out by one [`LastFm`](crate::LastFm).
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use lastfm::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_rate_limit(Duration::from_millis(500))
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.rate_limit, Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API endpoint; the query string is appended after a `?`.
    pub api_url: String,

    /// Minimum time between the end of one call and the start of the next.
    pub rate_limit: Duration,

    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// Overall request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            rate_limit: DEFAULT_RATE_LIMIT,
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Point the client at another endpoint (a mock server, a proxy).
    pub fn with_api_url<S: Into<String>>(mut self, api_url: S) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Change the rate-limit threshold.
    pub fn with_rate_limit(mut self, rate_limit: Duration) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Change the user agent.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base string for the URL builder: the endpoint followed by `?`.
    pub(crate) fn query_base(&self) -> String {
        format!("{}?", self.api_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.rate_limit, Duration::from_millis(200));
        assert!(config.user_agent.starts_with("lastfm/"));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_query_base_appends_question_mark() {
        let config = ClientConfig::default().with_api_url("http://127.0.0.1:9000/2.0/");
        assert_eq!(config.query_base(), "http://127.0.0.1:9000/2.0/?");
    }
}

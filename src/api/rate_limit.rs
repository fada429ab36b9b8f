//! Minimum-spacing gate for outbound calls.
//!
//! The gate remembers when the last successful call finished. A caller that
//! arrives too early sleeps for the full threshold and then checks again,
//! possibly several times; it never computes the exact remaining wait.
//!
//! Checking the gate and stamping it are separate steps. Two tasks sharing a
//! limiter can both find it open before either stamps it, so concurrent
//! callers may burst past the nominal rate. Sequential callers are always
//! spaced by at least the threshold.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::trace;

/// Shared rate-limit state.
///
/// Cloning is cheap and every clone shares the same gate.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    threshold: Duration,
    last_call: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a gate that keeps calls at least `threshold` apart.
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    /// The configured threshold.
    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Whether a call may start right now.
    pub async fn is_open(&self) -> bool {
        match *self.last_call.lock().await {
            Some(last) => last.elapsed() >= self.threshold,
            None => true,
        }
    }

    /// Suspend until the gate is open.
    pub async fn wait(&self) {
        while !self.is_open().await {
            trace!(threshold = ?self.threshold, "rate limited, sleeping");
            sleep(self.threshold).await;
        }
    }

    /// Stamp the gate after a successful call.
    pub async fn record(&self) {
        *self.last_call.lock().await = Some(Instant::now());
    }
}

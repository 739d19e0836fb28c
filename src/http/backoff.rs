//! Retry wait-time policies
//!
//! The HTTP client asks a [`RetryScheduler`] how long to pause before each
//! retry. Two schedulers exist:
//!
//! - [`RateLimitResetBackoff`] honours Pushbullet's `X-Ratelimit-Reset`
//!   header and is what the tap uses.
//! - [`ExponentialBackoff`] is a generic constant/linear/exponential
//!   schedule keyed on the attempt number.

use crate::types::BackoffType;
use chrono::Utc;
use reqwest::header::HeaderMap;
use std::time::Duration;

/// Header carrying the epoch second at which the rate limit resets
pub const RATE_LIMIT_RESET_HEADER: &str = "X-Ratelimit-Reset";

/// Wait used when a request failed without producing any response
pub const NO_RESPONSE_WAIT_SECONDS: f64 = 60.0;

/// Rate-limit information carried by a failed response
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RateLimitSignal {
    /// Absolute epoch seconds at which the limit resets
    pub reset_epoch_seconds: Option<f64>,
}

impl RateLimitSignal {
    /// Signal with a known reset time
    pub fn reset_at(epoch_seconds: f64) -> Self {
        Self {
            reset_epoch_seconds: Some(epoch_seconds),
        }
    }

    /// Read the reset header from a response.
    ///
    /// Unparseable or non-finite values are treated as absent.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let reset_epoch_seconds = headers
            .get(RATE_LIMIT_RESET_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite());

        Self {
            reset_epoch_seconds,
        }
    }
}

/// What the retry loop knows about a failed request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailureSignal {
    /// The request never produced a response (connect error, timeout)
    NoResponse,
    /// A response came back with a retryable status
    Response(RateLimitSignal),
}

/// Seconds to wait before retrying after `signal`, given the current time.
///
/// Never negative.
pub fn wait_seconds(signal: &FailureSignal, now_epoch_seconds: f64) -> f64 {
    match signal {
        FailureSignal::NoResponse => NO_RESPONSE_WAIT_SECONDS,
        FailureSignal::Response(RateLimitSignal {
            reset_epoch_seconds: Some(reset),
        }) => (reset - now_epoch_seconds).max(0.0),
        FailureSignal::Response(RateLimitSignal {
            reset_epoch_seconds: None,
        }) => 0.0,
    }
}

/// Current wall-clock time as fractional epoch seconds
pub fn now_epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

fn seconds_to_duration(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds.max(0.0)).unwrap_or(Duration::MAX)
}

/// Decides how long to wait before retrying a failed request
pub trait RetryScheduler: Send + Sync + std::fmt::Debug {
    /// Wait before retry number `attempt` (zero-based) after `signal`
    fn wait_before_retry(&self, attempt: u32, signal: &FailureSignal) -> Duration;
}

/// Waits until the server-announced rate-limit reset
#[derive(Debug, Clone, Copy, Default)]
pub struct RateLimitResetBackoff;

impl RetryScheduler for RateLimitResetBackoff {
    fn wait_before_retry(&self, _attempt: u32, signal: &FailureSignal) -> Duration {
        seconds_to_duration(wait_seconds(signal, now_epoch_seconds()))
    }
}

/// Attempt-based backoff schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentialBackoff {
    /// How the delay grows with each attempt
    pub backoff_type: BackoffType,
    /// Delay for the first retry
    pub initial: Duration,
    /// Upper bound for any delay
    pub max: Duration,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial: Duration::from_millis(100),
            max: Duration::from_secs(60),
        }
    }
}

impl ExponentialBackoff {
    /// Create a new schedule
    pub fn new(backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        Self {
            backoff_type,
            initial,
            max,
        }
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate(&self, attempt: u32) -> Duration {
        let delay = match self.backoff_type {
            BackoffType::Constant => self.initial,
            BackoffType::Linear => self.initial.saturating_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.initial.saturating_mul(factor)
            }
        };

        std::cmp::min(delay, self.max)
    }
}

impl RetryScheduler for ExponentialBackoff {
    fn wait_before_retry(&self, attempt: u32, _signal: &FailureSignal) -> Duration {
        self.calculate(attempt)
    }
}

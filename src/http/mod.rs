//! HTTP client module
//!
//! Provides the HTTP client, retry wait policies and rate limiting.
//!
//! # Features
//!
//! - **Automatic Retries**: 429 and 5xx responses, timeouts and connect errors
//! - **Rate-Limit Aware Waits**: honours `X-Ratelimit-Reset`
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Authentication**: Integration with auth module

mod backoff;
mod client;
mod rate_limit;

pub use backoff::{
    now_epoch_seconds, wait_seconds, ExponentialBackoff, FailureSignal, RateLimitResetBackoff,
    RateLimitSignal, RetryScheduler, NO_RESPONSE_WAIT_SECONDS, RATE_LIMIT_RESET_HEADER,
};
pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, PageFetcher, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig, DEFAULT_REQUESTS_PER_SECOND};

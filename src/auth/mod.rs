//! Authentication module
//!
//! Pushbullet authenticates every request with an access token carried in
//! the `Access-Token` header. The `Authenticator` applies an `AuthConfig`
//! to outgoing request builders.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;

#[cfg(test)]
mod tests;

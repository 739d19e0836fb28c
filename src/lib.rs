// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # tap-pushbullet
//!
//! A Singer tap that extracts chats, devices, pushes and subscriptions from
//! the Pushbullet REST API.
//!
//! ## Features
//!
//! - **Incremental Sync**: `modified_after` bookmarks per stream
//! - **Cursor Pagination**: follows the `cursor` field, guarding against repeats
//! - **Rate Limit Aware**: waits until `X-Ratelimit-Reset` before retrying a 429
//! - **Singer Output**: SCHEMA, RECORD and STATE messages as JSON lines on stdout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tap_pushbullet::engine::SyncEngine;
//! use tap_pushbullet::output::SingerWriter;
//! use tap_pushbullet::state::StateManager;
//! use tap_pushbullet::tap::{Tap, TapConfig};
//!
//! #[tokio::main]
//! async fn main() -> tap_pushbullet::Result<()> {
//!     let tap = Tap::new(TapConfig::new("o.my-access-token"))?;
//!     let definitions: Vec<_> = tap.streams().iter().map(|s| s.definition().clone()).collect();
//!
//!     let mut engine = SyncEngine::new(
//!         tap.http_client()?,
//!         StateManager::in_memory(),
//!         SingerWriter::stdout(),
//!     );
//!     engine.sync_all(&definitions, tap.config().start_date).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Tap Interface                          │
//! │   --about → settings    --discover → Catalog    sync → stdout   │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │  Streams │   HTTP    │   Paginate    │   State   │   Output    │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ chats    │ GET       │ Cursor        │ Bookmarks │ SCHEMA      │
//! │ devices  │ Retry     │ Repeat guard  │ modified  │ RECORD      │
//! │ pushes   │ Rate Limit│ Empty guard   │           │ STATE       │
//! │ subs     │ Backoff   │               │           │             │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the tap
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request authentication
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Record extraction from response bodies
pub mod decode;

/// Bookmarks and state persistence
pub mod state;

/// Singer message output
pub mod output;

/// Main execution engine
pub mod engine;

/// JSON Schema building blocks
pub mod schema;

/// Pushbullet stream definitions
pub mod streams;

/// Settings, stream registry and catalog
pub mod tap;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use tap::{Tap, TapConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

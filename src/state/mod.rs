//! State management module
//!
//! Singer bookmarks for incremental replication.
//!
//! # Overview
//!
//! The state module provides:
//! - `State` - the `{"bookmarks": {...}}` document read from `--state`
//! - `StateManager` - shared access to the state during a sync, with
//!   optional atomic persistence to a file

mod manager;
mod types;

pub use manager::StateManager;
pub use types::{State, StreamState};

//! Output module
//!
//! Singer message types and the line-oriented writer that puts them on
//! stdout.
//!
//! # Overview
//!
//! - `Message` - SCHEMA, RECORD and STATE messages
//! - `SingerWriter` - serializes one message per line to any `io::Write`

mod message;
mod writer;

pub use message::Message;
pub use writer::SingerWriter;

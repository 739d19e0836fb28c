//! Singer message writer
//!
//! Writes one JSON document per line. Stdout is reserved for these lines;
//! diagnostics go through `tracing` to stderr.

use super::message::Message;
use crate::error::Result;
use std::io::Write;

/// Line-delimited JSON writer for Singer messages
#[derive(Debug)]
pub struct SingerWriter<W: Write> {
    /// Destination
    out: W,
    /// Number of messages written
    messages_written: usize,
}

impl SingerWriter<std::io::Stdout> {
    /// Writer on the process's stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> SingerWriter<W> {
    /// Create a new writer
    pub fn new(out: W) -> Self {
        Self {
            out,
            messages_written: 0,
        }
    }

    /// Write a message followed by a newline
    pub fn write(&mut self, message: &Message) -> Result<()> {
        serde_json::to_writer(&mut self.out, message)?;
        self.out.write_all(b"\n")?;
        self.messages_written += 1;
        Ok(())
    }

    /// Flush the destination
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Get the number of messages written so far
    pub fn messages_written(&self) -> usize {
        self.messages_written
    }

    /// Consume the writer and return the destination
    pub fn into_inner(self) -> W {
        self.out
    }
}

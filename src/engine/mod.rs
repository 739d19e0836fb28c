//! Execution engine module
//!
//! Main read loop and stream orchestration.
//!
//! # Overview
//!
//! The engine module provides:
//! - `SyncEngine` - Extracts streams page by page and writes Singer messages
//! - `SyncConfig` - Configuration for sync operations
//! - `SyncStats` - Counters reported at the end of a run
//!
//! Pushbullet returns the newest objects first, so a stream's bookmark is
//! only advanced once every page has been read. A run cut short by
//! `max_records` leaves the bookmark where it was.

mod types;

pub use types::{SyncConfig, SyncStats};

use crate::decode::JsonDecoder;
use crate::error::Result;
use crate::http::PageFetcher;
use crate::output::{Message, SingerWriter};
use crate::pagination::{PaginationState, Paginator};
use crate::state::StateManager;
use crate::streams::StreamDefinition;
use crate::types::json_as_f64;
use chrono::Utc;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Sync engine for orchestrating data extraction
pub struct SyncEngine<F: PageFetcher, W: Write> {
    /// Source of response pages
    fetcher: F,
    /// State manager
    state: StateManager,
    /// Message destination
    writer: SingerWriter<W>,
    /// Sync configuration
    config: SyncConfig,
    /// Statistics
    stats: SyncStats,
}

impl<F: PageFetcher, W: Write> SyncEngine<F, W> {
    /// Create a new sync engine
    pub fn new(fetcher: F, state: StateManager, writer: SingerWriter<W>) -> Self {
        Self {
            fetcher,
            state,
            writer,
            config: SyncConfig::default(),
            stats: SyncStats::default(),
        }
    }

    /// Set sync configuration
    #[must_use]
    pub fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the state manager
    pub fn state(&self) -> &StateManager {
        &self.state
    }

    /// Get statistics
    pub fn stats(&self) -> &SyncStats {
        &self.stats
    }

    /// Consume the engine and return the writer
    pub fn into_writer(self) -> SingerWriter<W> {
        self.writer
    }

    /// Sync streams in order
    ///
    /// With `fail_fast` the first error ends the run; otherwise failing
    /// streams are logged and counted and the first error is returned after
    /// the remaining streams have been attempted.
    pub async fn sync_all(
        &mut self,
        streams: &[StreamDefinition],
        start_date: Option<f64>,
    ) -> Result<&SyncStats> {
        let start = Instant::now();
        let mut first_error = None;

        for stream in streams {
            if let Err(e) = self.sync_stream(stream, start_date).await {
                self.stats.add_error();
                error!(stream = %stream.name, error = %e, "Stream sync failed");
                if self.config.fail_fast {
                    return Err(e);
                }
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        self.stats.set_duration(start.elapsed().as_millis() as u64);
        debug!(
            messages = self.writer.messages_written(),
            duration_ms = self.stats.duration_ms,
            "Run finished"
        );

        match first_error {
            Some(e) => Err(e),
            None => Ok(&self.stats),
        }
    }

    /// Sync a single stream and return the number of records written
    pub async fn sync_stream(
        &mut self,
        stream: &StreamDefinition,
        start_date: Option<f64>,
    ) -> Result<usize> {
        let name = stream.name.as_str();
        let replication_key = stream.replication_key.as_deref();
        info!(stream = name, "Starting sync");

        self.writer.write(&Message::schema(
            name,
            &stream.schema,
            &stream.primary_keys,
            replication_key,
        ))?;

        let starting_value = match replication_key {
            Some(_) => self.state.starting_value(name, start_date).await,
            None => None,
        };
        if let Some(value) = starting_value {
            debug!(stream = name, modified_after = value, "Resuming from bookmark");
        }

        let decoder = JsonDecoder::with_path(&stream.records_path);
        let paginator = stream.paginator();
        let mut pagination_state = PaginationState::new();
        let mut max_seen: Option<f64> = None;
        let mut written = 0usize;
        let mut truncated = false;

        loop {
            let mut params = stream.url_params(None, starting_value);
            params.extend(paginator.page_params(&pagination_state));

            let body = self.fetcher.fetch_page(&stream.path, &params).await?;
            self.stats.add_page();

            let records = decoder.decode_value(&body)?;
            let record_count = records.len();
            let extracted_at = Utc::now();

            let mut page_written = 0usize;
            for record in records {
                if self.config.limit_reached(written) {
                    truncated = true;
                    break;
                }
                if let Some(key) = replication_key {
                    if let Some(value) = record.get(key).and_then(json_as_f64) {
                        max_seen = Some(max_seen.map_or(value, |m| m.max(value)));
                    }
                }
                self.writer
                    .write(&Message::record(name, record, extracted_at))?;
                written += 1;
                page_written += 1;
            }
            self.stats.add_records(page_written);

            debug!(
                stream = name,
                page = pagination_state.pages + 1,
                records = record_count,
                "Fetched page"
            );

            if truncated {
                break;
            }

            let next = paginator.process_response(&body, record_count, &mut pagination_state)?;
            if next.is_done() {
                break;
            }
            if self.config.limit_reached(written) {
                truncated = true;
                break;
            }

            if self.config.emit_state_per_page {
                self.emit_state().await?;
            }
        }

        match (replication_key, max_seen) {
            (Some(key), Some(value)) if !truncated => {
                if self.state.advance_bookmark(name, key, value).await {
                    debug!(stream = name, bookmark = value, "Bookmark advanced");
                }
            }
            (Some(_), Some(_)) => {
                warn!(
                    stream = name,
                    max_records = self.config.max_records,
                    "Record limit reached, bookmark not advanced"
                );
            }
            _ => {}
        }
        self.emit_state().await?;
        self.writer.flush()?;

        self.stats.add_stream(truncated);
        info!(stream = name, records = written, "Completed sync");
        Ok(written)
    }

    async fn emit_state(&mut self) -> Result<()> {
        let snapshot = self.state.snapshot().await;
        self.writer.write(&Message::state(snapshot))
    }
}

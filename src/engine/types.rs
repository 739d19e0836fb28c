//! Engine types

/// Knobs for a sync run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Write a STATE message after every page that has a successor
    pub emit_state_per_page: bool,
    /// Per-stream record cap, 0 for none
    pub max_records: usize,
    /// Abort the run on the first failing stream
    pub fail_fast: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            emit_state_per_page: false,
            max_records: 0,
            fail_fast: true,
        }
    }
}

impl SyncConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_state_per_page(mut self, emit: bool) -> Self {
        self.emit_state_per_page = emit;
        self
    }

    /// Cap records per stream. A capped stream keeps its old bookmark.
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }

    #[must_use]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub(crate) fn limit_reached(&self, written: usize) -> bool {
        self.max_records > 0 && written >= self.max_records
    }
}

/// Counters for a run, logged when it ends
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub records_synced: usize,
    pub pages_fetched: usize,
    /// Streams that ran to completion
    pub streams_synced: usize,
    /// Streams stopped early by `max_records`
    pub streams_truncated: usize,
    /// Streams that failed
    pub errors: usize,
    pub duration_ms: u64,
}

impl SyncStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_records(&mut self, count: usize) {
        self.records_synced += count;
    }

    pub(crate) fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    pub(crate) fn add_stream(&mut self, truncated: bool) {
        self.streams_synced += 1;
        if truncated {
            self.streams_truncated += 1;
        }
    }

    pub(crate) fn add_error(&mut self) {
        self.errors += 1;
    }

    pub(crate) fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}

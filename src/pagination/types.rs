//! Pagination types and traits

use crate::error::Result;
use crate::types::StringMap;
use serde_json::Value;

/// What to do after a page has been read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Request another page, overriding these query parameters
    Continue { query_params: StringMap },
    /// The stream is exhausted
    Done,
}

impl NextPage {
    pub fn with_param(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Continue {
            query_params: StringMap::from([(key.into(), value.into())]),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn is_continue(&self) -> bool {
        !self.is_done()
    }
}

/// Progress through one stream's pages
///
/// `cursor` holds the cursor sent with the next request, which is also the
/// one the repeated-cursor guard compares against.
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    pub pages: u32,
    pub cursor: Option<String>,
    pub total_fetched: u64,
    pub done: bool,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn next_page(&mut self) {
        self.pages = self.pages.saturating_add(1);
    }

    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched = self.total_fetched.saturating_add(count);
    }
}

/// Strategy deciding how a stream walks its pages
pub trait Paginator: Send + Sync {
    /// Pagination parameters for the next request (empty for the first page)
    fn page_params(&self, state: &PaginationState) -> StringMap;

    /// Inspect a page and decide whether another one follows
    fn process_response(
        &self,
        body: &Value,
        records_count: usize,
        state: &mut PaginationState,
    ) -> Result<NextPage>;
}

//! Cursor pagination strategy and its termination checks

use super::types::{NextPage, PaginationState, Paginator};
use crate::decode::{extract_records, extract_string};
use crate::error::Result;
use crate::types::StringMap;
use serde_json::Value;
use tracing::{debug, warn};

/// True iff `records_path` matches at least one element of `body`
///
/// A missing or malformed envelope matches nothing, so it reports no more
/// records regardless of any cursor in the body.
pub fn has_more_records(body: &Value, records_path: &str) -> Result<bool> {
    Ok(!extract_records(body, records_path)?.is_empty())
}

/// True when the API handed back the cursor it was just given
pub fn is_repeated_cursor(next: &str, previous: Option<&str>) -> bool {
    previous == Some(next)
}

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor-based pagination (`?cursor=abc123`)
///
/// Reads the next cursor from the response body and stops on an empty page,
/// a missing cursor, or a cursor that repeats the previous one.
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    /// Query parameter name for cursor
    pub cursor_param: String,
    /// Path to the cursor in the response body
    pub cursor_path: String,
    /// JSONPath to the page's records
    pub records_path: String,
}

impl CursorPaginator {
    /// Create a new cursor paginator
    pub fn new(
        cursor_param: impl Into<String>,
        cursor_path: impl Into<String>,
        records_path: impl Into<String>,
    ) -> Self {
        Self {
            cursor_param: cursor_param.into(),
            cursor_path: cursor_path.into(),
            records_path: records_path.into(),
        }
    }

    /// Paginator for the Pushbullet envelope `{<records>: [...], cursor}`
    pub fn pushbullet(records_path: impl Into<String>) -> Self {
        Self::new("cursor", "$.cursor", records_path)
    }
}

impl Paginator for CursorPaginator {
    fn page_params(&self, state: &PaginationState) -> StringMap {
        let mut params = StringMap::new();
        if let Some(cursor) = &state.cursor {
            params.insert(self.cursor_param.clone(), cursor.clone());
        }
        params
    }

    fn process_response(
        &self,
        body: &Value,
        records_count: usize,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.next_page();
        state.add_fetched(records_count as u64);

        if !has_more_records(body, &self.records_path)? {
            debug!(page = state.pages, "Empty page, pagination complete");
            state.mark_done();
            return Ok(NextPage::Done);
        }

        let cursor = match extract_string(body, &self.cursor_path) {
            Some(cursor) if !cursor.is_empty() => cursor,
            _ => {
                debug!(page = state.pages, "No cursor in response, pagination complete");
                state.mark_done();
                return Ok(NextPage::Done);
            }
        };

        if is_repeated_cursor(&cursor, state.cursor.as_deref()) {
            warn!(
                cursor = %cursor,
                page = state.pages,
                "API returned the previous cursor again, stopping pagination"
            );
            state.mark_done();
            return Ok(NextPage::Done);
        }

        state.set_cursor(cursor.clone());
        Ok(NextPage::with_param(&self.cursor_param, cursor))
    }
}

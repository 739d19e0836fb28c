//! Pagination module
//!
//! Cursor pagination with two termination guards:
//!
//! - a page whose records JSONPath matches nothing ends the stream
//! - a cursor equal to the previous one ends the stream
//!
//! The guards are evaluated independently, so an API that keeps returning
//! the same non-empty page with the same cursor still terminates.

mod strategies;
mod types;

pub use strategies::{has_more_records, is_repeated_cursor, CursorPaginator};
pub use types::{NextPage, PaginationState, Paginator};

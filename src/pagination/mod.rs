//! Pagination
//!
//! The Tilroy API paginates with `count` and `page` query parameters and
//! gives no total-count field, so termination is heuristic: an empty page
//! ends the sequence, and a page shorter than the requested `count` is
//! treated as the last page. Pages are requested strictly sequentially.

mod strategies;
mod types;

pub use strategies::PageCountPaginator;
pub use types::{NextPage, PaginationState, Paginator};

#[cfg(test)]
mod tests;

//! Pagination types and traits

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available with these query parameters
    Continue {
        /// Query parameters for the next request
        query_params: Vec<(String, String)>,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with query parameters
    pub fn with_params(params: Vec<(String, String)>) -> Self {
        Self::Continue {
            query_params: params,
        }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Tracks pagination progress during iteration
#[derive(Debug, Clone)]
pub struct PaginationState {
    /// Current page number (1-based)
    pub page: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            total_fetched: 0,
            done: false,
        }
    }
}

impl PaginationState {
    /// Create a new pagination state starting at page 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Increment the page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Add to the total fetched count
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Query parameters for the current page request
    fn page_params(&self, state: &PaginationState) -> Vec<(String, String)>;

    /// Process a page's record count and decide whether to continue
    fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage;
}

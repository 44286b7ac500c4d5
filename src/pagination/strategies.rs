//! Pagination strategy implementations

use super::types::{NextPage, PaginationState, Paginator};

/// Page-number pagination with short-page termination
///
/// Requests `?count={page_size}&page={page}` starting at page 1. The
/// sequence ends on an empty page, or after a page shorter than
/// `page_size` — a heuristic last-page signal, since the API exposes no
/// authoritative total count. This assumes pages are never short except
/// the final one.
#[derive(Debug, Clone)]
pub struct PageCountPaginator {
    /// Query parameter name for the page number
    pub page_param: String,
    /// Query parameter name for the page size
    pub count_param: String,
    /// Number of records per page
    pub page_size: u32,
}

impl PageCountPaginator {
    /// Create a paginator with the Tilroy parameter names
    pub fn new(page_size: u32) -> Self {
        Self {
            page_param: "page".to_string(),
            count_param: "count".to_string(),
            page_size,
        }
    }

    /// Override the query parameter names
    #[must_use]
    pub fn with_params(
        mut self,
        page_param: impl Into<String>,
        count_param: impl Into<String>,
    ) -> Self {
        self.page_param = page_param.into();
        self.count_param = count_param.into();
        self
    }
}

impl Paginator for PageCountPaginator {
    fn page_params(&self, state: &PaginationState) -> Vec<(String, String)> {
        vec![
            (self.count_param.clone(), self.page_size.to_string()),
            (self.page_param.clone(), state.page.to_string()),
        ]
    }

    fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage {
        state.add_fetched(records_count as u64);

        // Empty page: end of data
        if records_count == 0 {
            state.mark_done();
            return NextPage::Done;
        }

        // Short page: treated as the last page
        if records_count < self.page_size as usize {
            state.mark_done();
            return NextPage::Done;
        }

        state.next_page();
        NextPage::with_params(self.page_params(state))
    }
}

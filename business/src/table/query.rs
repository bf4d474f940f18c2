//! Search and page state owned by a single table instance.

use log::debug;

/// Transient query state of a table: the search string and the current page.
///
/// Created with an empty query on page 0 and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    search_query: String,
    page_index: usize,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Replaces the search string and returns to the first page.
    ///
    /// The page resets even when the new string equals the old one.
    pub fn edit_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.page_index = 0;
        debug!("Search edited to {:?}, page reset", self.search_query);
    }

    /// Moves one page back, staying on the first page.
    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
        debug!("Moved to page {}", self.page_index);
    }

    /// Moves one page forward, staying on the last of `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        self.page_index = (self.page_index + 1).min(last_page(total_pages));
        debug!("Moved to page {} of {total_pages}", self.page_index);
    }

    /// Pulls a stale page index back into `0..total_pages`.
    pub fn clamp(&mut self, total_pages: usize) {
        let last = last_page(total_pages);
        if self.page_index > last {
            debug!("Clamping page {} to {last}", self.page_index);
            self.page_index = last;
        }
    }
}

fn last_page(total_pages: usize) -> usize {
    total_pages.saturating_sub(1)
}

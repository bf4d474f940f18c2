//! The configured table: search, pagination and row activation over a borrowed collection.

use bon::Builder;
use log::{debug, info};
use ustr::Ustr;

use super::column::ColumnDescriptor;
use super::navigation::{Navigator, RowActivation};
use super::query::QueryState;
use super::record::Record;
use super::render::{PageControls, RenderedRow, StatusLine, TableBody, TableRender};

/// Rows per page when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maps a record to the URL opened when its row is activated.
pub type RowUrlFn<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Field names consulted by the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchKeys(Vec<Ustr>);

impl SearchKeys {
    /// True when any key's value contains `needle`, which must already be lowercase.
    ///
    /// Missing fields count as the empty string.
    fn matches<T: Record>(&self, record: &T, needle: &str) -> bool {
        self.0.iter().any(|key| {
            record
                .field(key)
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle)
        })
    }
}

impl<const N: usize> From<[&str; N]> for SearchKeys {
    fn from(keys: [&str; N]) -> Self {
        Self(keys.into_iter().map(Ustr::from).collect())
    }
}

impl From<&[&str]> for SearchKeys {
    fn from(keys: &[&str]) -> Self {
        Self(keys.iter().copied().map(Ustr::from).collect())
    }
}

impl From<Vec<Ustr>> for SearchKeys {
    fn from(keys: Vec<Ustr>) -> Self {
        Self(keys)
    }
}

/// A searchable, paginated table over caller-owned records.
///
/// The table holds configuration only. Data is borrowed per render and the
/// query state lives in a [`QueryState`] owned by the caller's widget.
#[derive(Builder)]
pub struct DataTable<T> {
    columns: Vec<ColumnDescriptor<T>>,
    /// Shows the search box and enables filtering.
    #[builder(default)]
    searchable: bool,
    /// Without keys no filtering happens, even when searchable.
    #[builder(into)]
    search_keys: Option<SearchKeys>,
    #[builder(default = DEFAULT_PAGE_SIZE)]
    page_size: usize,
    row_url: Option<RowUrlFn<T>>,
}

impl<T> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("searchable", &self.searchable)
            .field("search_keys", &self.search_keys)
            .field("page_size", &self.page_size)
            .field("row_url", &self.row_url.is_some())
            .finish()
    }
}

impl<T> DataTable<T> {
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn is_navigable(&self) -> bool {
        self.row_url.is_some()
    }

    /// Rows per page, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Number of pages needed for `len` filtered records.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size())
    }

    /// Activates the row for `record`.
    ///
    /// Navigates to the row URL unless it is empty, in which case nothing happens.
    pub fn activate_row(&self, record: &T, navigator: &mut dyn Navigator) -> RowActivation {
        let Some(row_url) = &self.row_url else {
            return RowActivation::Disabled;
        };

        let url = row_url(record);
        if url.is_empty() {
            debug!("Row activation suppressed: empty URL");
            return RowActivation::Suppressed;
        }

        info!("Navigating to {url}");
        navigator.navigate(&url);
        RowActivation::Navigated(url)
    }
}

impl<T: Record> DataTable<T> {
    /// Records matching `search_query`, in their original order.
    pub fn filter<'a>(&self, data: &'a [T], search_query: &str) -> Vec<&'a T> {
        self.matching(data, search_query)
            .into_iter()
            .map(|(_, record)| record)
            .collect()
    }

    /// Like [`Self::filter`], keeping each record's index in `data`.
    fn matching<'a>(&self, data: &'a [T], search_query: &str) -> Vec<(usize, &'a T)> {
        match &self.search_keys {
            Some(keys) if self.searchable && !search_query.is_empty() => {
                let needle = search_query.to_lowercase();
                data.iter()
                    .enumerate()
                    .filter(|(_, record)| keys.matches(*record, &needle))
                    .collect()
            }
            _ => data.iter().enumerate().collect(),
        }
    }

    /// Moves `query` one page forward within the filtered `data`.
    pub fn next_page(&self, data: &[T], query: &mut QueryState) {
        let total_pages = self.total_pages(self.filter(data, query.search_query()).len());
        query.next_page(total_pages);
    }

    /// Renders the current page of `data`.
    ///
    /// While `loading`, nothing is filtered or paged and `query` is left untouched.
    /// Otherwise a page index past the end is clamped back into range first.
    pub fn render<'a>(
        &self,
        data: &'a [T],
        loading: bool,
        query: &mut QueryState,
    ) -> TableRender<'a, T> {
        let headers = self
            .columns
            .iter()
            .map(|column| column.label().to_owned())
            .collect();

        if loading {
            return TableRender {
                headers,
                searchable: self.searchable,
                navigable: self.is_navigable(),
                body: TableBody::Loading,
                status: StatusLine::Loading,
                controls: PageControls::disabled(query.page_index()),
            };
        }

        let filtered = self.matching(data, query.search_query());
        let total = filtered.len();
        let total_pages = self.total_pages(total);
        query.clamp(total_pages);

        let page_size = self.page_size();
        let start = query.page_index() * page_size;
        let rows: Vec<_> = filtered
            .iter()
            .skip(start)
            .take(page_size)
            .map(|&(position, record)| RenderedRow {
                position,
                record,
                cells: self
                    .columns
                    .iter()
                    .map(|column| column.render_cell(record, position))
                    .collect(),
            })
            .collect();

        let status = if total == 0 {
            StatusLine::NoResults
        } else {
            StatusLine::Showing {
                first: start + 1,
                last: (start + page_size).min(total),
                total,
            }
        };

        TableRender {
            headers,
            searchable: self.searchable,
            navigable: self.is_navigable(),
            body: if rows.is_empty() {
                TableBody::NoResults
            } else {
                TableBody::Rows(rows)
            },
            status,
            controls: PageControls::new(query.page_index(), total_pages),
        }
    }
}

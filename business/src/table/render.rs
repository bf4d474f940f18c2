//! Output of a table render: what the UI layer paints.

use std::fmt;

use super::column::CellContent;

/// Placeholder text shown while the caller is loading data.
pub const LOADING_TEXT: &str = "Loading...";

/// Placeholder text shown when the current page has no rows.
pub const NO_RESULTS_TEXT: &str = "No results.";

/// One rendered row, borrowing its record from the caller's collection.
#[derive(Debug)]
pub struct RenderedRow<'a, T> {
    /// 0-based index of the record in the collection passed to `render`.
    pub position: usize,
    pub record: &'a T,
    pub cells: Vec<CellContent>,
}

/// Table body contents.
#[derive(Debug)]
pub enum TableBody<'a, T> {
    /// A single full-width loading row.
    Loading,
    /// A single full-width "no results" row.
    NoResults,
    Rows(Vec<RenderedRow<'a, T>>),
}

impl<'a, T> TableBody<'a, T> {
    /// Text of the placeholder row, if the body is a placeholder.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_TEXT),
            Self::NoResults => Some(NO_RESULTS_TEXT),
            Self::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> &[RenderedRow<'a, T>] {
        match self {
            Self::Rows(rows) => rows,
            Self::Loading | Self::NoResults => &[],
        }
    }
}

/// Status line under the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Loading,
    NoResults,
    /// 1-based inclusive range `first..=last` out of `total` filtered records.
    Showing {
        first: usize,
        last: usize,
        total: usize,
    },
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str(LOADING_TEXT),
            Self::NoResults => f.write_str("No results"),
            Self::Showing { first, last, total } => {
                write!(f, "Showing {first}–{last} of {total}")
            }
        }
    }
}

/// State of the Previous/Next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControls {
    pub page_index: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl PageControls {
    pub(crate) fn disabled(page_index: usize) -> Self {
        Self {
            page_index,
            total_pages: 0,
            previous_enabled: false,
            next_enabled: false,
        }
    }

    pub(crate) fn new(page_index: usize, total_pages: usize) -> Self {
        Self {
            page_index,
            total_pages,
            previous_enabled: page_index > 0,
            next_enabled: page_index + 1 < total_pages,
        }
    }
}

/// A complete render of a table for one frame.
#[derive(Debug)]
pub struct TableRender<'a, T> {
    pub headers: Vec<String>,
    /// Whether the search box is shown.
    pub searchable: bool,
    /// Whether rows react to activation.
    pub navigable: bool,
    pub body: TableBody<'a, T>,
    pub status: StatusLine,
    pub controls: PageControls,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_text() {
        assert_eq!(
            StatusLine::Showing {
                first: 11,
                last: 20,
                total: 23
            }
            .to_string(),
            "Showing 11–20 of 23"
        );
        assert_eq!(StatusLine::NoResults.to_string(), "No results");
        assert_eq!(StatusLine::Loading.to_string(), "Loading...");
    }

    #[test]
    fn test_page_controls_boundaries() {
        let first = PageControls::new(0, 3);
        assert!(!first.previous_enabled);
        assert!(first.next_enabled);

        let last = PageControls::new(2, 3);
        assert!(last.previous_enabled);
        assert!(!last.next_enabled);

        let empty = PageControls::new(0, 0);
        assert!(!empty.previous_enabled);
        assert!(!empty.next_enabled);
    }
}

//! Generic tabular browser.
//!
//! Pages hand a borrowed collection of records to a [`DataTable`] together with
//! a [`QueryState`] they own. The table filters by the search box, slices out
//! the current page and produces a [`TableRender`] that the UI paints:
//! - `record`: field access by name ([`Record`])
//! - `column`: column descriptors and cell dispatch
//! - `query`: search string and page index
//! - `data_table`: configuration, filtering, pagination, row activation
//! - `render`: the render model (body, status line, page controls)
//! - `navigation`: full-page navigation on row activation

mod column;
mod data_table;
mod navigation;
mod query;
mod record;
mod render;

pub use column::{CellContent, ColumnDescriptor, RenderFn};
pub use data_table::{DEFAULT_PAGE_SIZE, DataTable, RowUrlFn, SearchKeys};
pub use navigation::{Navigator, RowActivation};
pub use query::QueryState;
pub use record::{Record, coerce_json};
pub use render::{
    LOADING_TEXT, NO_RESULTS_TEXT, PageControls, RenderedRow, StatusLine, TableBody, TableRender,
};

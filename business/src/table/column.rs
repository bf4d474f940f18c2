//! Column descriptors and cell rendering dispatch.

use std::fmt;

use egui::Color32;
use ustr::Ustr;

use super::record::Record;

/// Custom cell renderer.
pub type RenderFn<T> = Box<dyn Fn(&T) -> CellContent + Send + Sync>;

/// Renderable content of a single table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Plain text.
    Text(String),
    /// De-emphasized text, used for placeholders such as `-`.
    Muted(String),
    /// Short colored label, e.g. a lead status.
    Badge { text: String, color: Color32 },
}

impl CellContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::Muted(text.into())
    }

    pub fn badge(text: impl Into<String>, color: Color32) -> Self {
        Self::Badge {
            text: text.into(),
            color,
        }
    }

    /// The text shown in the cell, regardless of styling.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Muted(text) | Self::Badge { text, .. } => text,
        }
    }
}

/// How a column produces its cells.
enum CellKind<T> {
    /// The record's field named by the column key, as a string.
    Text,
    /// 1-based index of the record in the unsearched collection.
    RowNumber,
    /// Caller supplied renderer.
    Custom(RenderFn<T>),
}

impl<T> fmt::Debug for CellKind<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("Text"),
            Self::RowNumber => f.write_str("RowNumber"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Describes one displayed column.
pub struct ColumnDescriptor<T> {
    key: Ustr,
    label: String,
    sortable: bool,
    kind: CellKind<T>,
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<T> ColumnDescriptor<T> {
    /// A column showing `record[key]` as text.
    pub fn text(key: &str, label: impl Into<String>) -> Self {
        Self {
            key: Ustr::from(key),
            label: label.into(),
            sortable: false,
            kind: CellKind::Text,
        }
    }

    /// A column numbering records from 1 in the order they were passed in.
    ///
    /// Numbers stay attached to their record while a search narrows the view.
    pub fn row_number(key: &str, label: impl Into<String>) -> Self {
        Self {
            kind: CellKind::RowNumber,
            ..Self::text(key, label)
        }
    }

    /// A column whose cells come from `render`.
    pub fn custom(
        key: &str,
        label: impl Into<String>,
        render: impl Fn(&T) -> CellContent + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: CellKind::Custom(Box::new(render)),
            ..Self::text(key, label)
        }
    }

    /// Marks the column as sortable. Informational only: the table does not sort.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn key(&self) -> Ustr {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }
}

impl<T: Record> ColumnDescriptor<T> {
    /// Renders the cell for `record`, found at `position` (0-based) in the caller's collection.
    pub fn render_cell(&self, record: &T, position: usize) -> CellContent {
        match &self.kind {
            CellKind::Text => CellContent::Text(record.field(&self.key).unwrap_or_default()),
            CellKind::RowNumber => CellContent::Text((position + 1).to_string()),
            CellKind::Custom(render) => render(record),
        }
    }
}

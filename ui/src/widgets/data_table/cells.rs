//! Painting of individual cells and placeholder rows.

use egui::{Frame, Margin, RichText, Ui};
use leadloop_business::table::CellContent;

use crate::utils::colors::COLOR_BADGE_TEXT;

/// Renders one cell's content.
#[inline]
pub fn render_cell(ui: &mut Ui, content: &CellContent) {
    match content {
        CellContent::Text(text) => {
            ui.label(text);
        }
        CellContent::Muted(text) => {
            ui.label(RichText::new(text).weak());
        }
        CellContent::Badge { text, color } => {
            Frame::NONE
                .fill(*color)
                .corner_radius(8.0)
                .inner_margin(Margin::symmetric(8, 2))
                .show(ui, |ui| {
                    ui.label(RichText::new(text).small().color(COLOR_BADGE_TEXT));
                });
        }
    }
}

/// Renders the header label of a column.
#[inline]
pub fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}

/// Renders the text of a placeholder row ("Loading...", "No results.").
#[inline]
pub fn render_placeholder_cell(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).weak());
}

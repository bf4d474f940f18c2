//! Status line and page controls below the table.

use egui::{Align, Button, Layout, RichText, Ui};
use leadloop_business::table::{PageControls, StatusLine};

/// Which page control was pressed this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Previous,
    Next,
}

/// Renders "Showing a–b of n" on the left and Previous/Next on the right.
pub fn render_footer(ui: &mut Ui, status: &StatusLine, controls: &PageControls) -> Option<PageMove> {
    let mut page_move = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new(status.to_string()).small().weak());

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // Right-to-left: Next is added first so it ends up rightmost.
            if ui
                .add_enabled(controls.next_enabled, Button::new("Next"))
                .clicked()
            {
                page_move = Some(PageMove::Next);
            }
            if ui
                .add_enabled(controls.previous_enabled, Button::new("Previous"))
                .clicked()
            {
                page_move = Some(PageMove::Previous);
            }
        });
    });

    page_move
}

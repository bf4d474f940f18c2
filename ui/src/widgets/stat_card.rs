//! Headline number card shared by both pages.

use egui::{Color32, Frame, Margin, RichText, Ui};

pub fn stat_card(ui: &mut Ui, title: &str, value: String, color: Color32) {
    Frame::group(ui.style())
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(title).small().weak());
                ui.label(RichText::new(value).heading().strong().color(color));
            });
        });
}

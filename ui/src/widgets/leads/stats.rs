//! Headline stat cards.

use egui::Ui;
use leadloop_business::leads::DashboardStats;

use crate::utils::colors::{
    COLOR_STAT_CONVERTED, COLOR_STAT_NEW, COLOR_STAT_RATE, COLOR_STAT_TOTAL,
};
use crate::widgets::stat_card::stat_card;

pub fn render_stats(ui: &mut Ui, stats: &DashboardStats) {
    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Total Leads", stats.total.to_string(), COLOR_STAT_TOTAL);
        stat_card(ui, "New Leads", stats.new.to_string(), COLOR_STAT_NEW);
        stat_card(ui, "Converted", stats.converted.to_string(), COLOR_STAT_CONVERTED);
        stat_card(
            ui,
            "Conversion Rate",
            format!("{}%", stats.conversion_rate),
            COLOR_STAT_RATE,
        );
    });
}

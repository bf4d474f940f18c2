//! Distribution charts: leads per status, per interest level and per source.
//!
//! Each chart is a column of horizontal bars scaled to its largest value,
//! labelled `Name: count`.

use egui::{Color32, Frame, Label, Margin, Rect, Sense, Ui, vec2};
use leadloop_business::leads::{DashboardStats, InterestLevel, LeadStatus, SourceCount};

use crate::utils::colors::COLOR_CHART_SOURCE;

const CHART_WIDTH: f32 = 300.0;
const LABEL_WIDTH: f32 = 130.0;
const BAR_HEIGHT: f32 = 16.0;

struct Bar {
    label: String,
    value: usize,
    color: Color32,
}

/// "contacted" -> "Contacted".
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn bar_chart(ui: &mut Ui, title: &str, bars: &[Bar]) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CHART_WIDTH);
            ui.strong(title);
            ui.add_space(6.0);

            if bars.is_empty() {
                ui.weak("No data");
                return;
            }

            let max = bars.iter().map(|bar| bar.value).max().unwrap_or(0).max(1);
            let track_width = CHART_WIDTH - LABEL_WIDTH - ui.spacing().item_spacing.x;
            for bar in bars {
                ui.horizontal(|ui| {
                    ui.add_sized(
                        [LABEL_WIDTH, BAR_HEIGHT],
                        Label::new(format!("{}: {}", bar.label, bar.value)),
                    );
                    let (track, _) =
                        ui.allocate_exact_size(vec2(track_width, BAR_HEIGHT), Sense::hover());
                    let filled = Rect::from_min_size(
                        track.min,
                        vec2(
                            track.width() * bar.value as f32 / max as f32,
                            track.height(),
                        ),
                    );
                    let painter = ui.painter();
                    painter.rect_filled(track, 2.0, ui.visuals().faint_bg_color);
                    painter.rect_filled(filled, 2.0, bar.color);
                });
            }
        });
}

pub fn render_charts(ui: &mut Ui, stats: &DashboardStats, by_source: &[SourceCount]) {
    let status_bars: Vec<_> = LeadStatus::ALL
        .into_iter()
        .map(|status| Bar {
            label: capitalize(status.as_str()),
            value: stats.for_status(status),
            color: status.color(),
        })
        .collect();

    let interest_bars: Vec<_> = InterestLevel::ALL
        .into_iter()
        .map(|level| Bar {
            label: capitalize(level.as_str()),
            value: stats.for_interest(level),
            color: level.color(),
        })
        .collect();

    let source_bars: Vec<_> = by_source
        .iter()
        .map(|entry| Bar {
            label: entry.source.clone(),
            value: entry.count,
            color: COLOR_CHART_SOURCE,
        })
        .collect();

    ui.horizontal_wrapped(|ui| {
        bar_chart(ui, "Status Distribution", &status_bars);
        bar_chart(ui, "Interest Level", &interest_bars);
        bar_chart(ui, "Leads by Source", &source_bars);
    });
}

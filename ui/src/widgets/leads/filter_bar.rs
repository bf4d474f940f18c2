//! Status / source / interest / date filters above the leads table.

use egui::{ComboBox, TextEdit, Ui};
use leadloop_business::leads::{InterestLevel, LeadFilters, LeadStatus, parse_filter_date};

const ALL: &str = "All";
const DATE_HINT: &str = "YYYY-MM-DD";

/// What the filter bar asks the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Set(LeadFilters),
    Clear,
}

/// Renders the filter bar. Date boxes are edited as text and applied once they parse.
pub fn render_filter_bar(
    ui: &mut Ui,
    current: &LeadFilters,
    sources: &[String],
    from_date_input: &mut String,
    to_date_input: &mut String,
) -> Option<FilterChange> {
    let mut filters = current.clone();
    let mut clear = false;

    ui.horizontal_wrapped(|ui| {
        ui.label("Status");
        ComboBox::from_id_salt("lead_status_filter")
            .selected_text(filters.status.map_or(ALL, LeadStatus::as_str))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.status, None, ALL);
                for status in LeadStatus::ALL {
                    ui.selectable_value(&mut filters.status, Some(status), status.as_str());
                }
            });

        ui.label("Source");
        ComboBox::from_id_salt("lead_source_filter")
            .selected_text(filters.source.as_deref().unwrap_or(ALL))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.source, None, ALL);
                for source in sources {
                    ui.selectable_value(&mut filters.source, Some(source.clone()), source.as_str());
                }
            });

        ui.label("Interest Level");
        ComboBox::from_id_salt("lead_interest_filter")
            .selected_text(filters.interest_level.map_or(ALL, InterestLevel::as_str))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filters.interest_level, None, ALL);
                for level in InterestLevel::ALL {
                    ui.selectable_value(&mut filters.interest_level, Some(level), level.as_str());
                }
            });

        ui.label("From Date");
        if ui
            .add(
                TextEdit::singleline(from_date_input)
                    .hint_text(DATE_HINT)
                    .desired_width(96.0),
            )
            .changed()
        {
            filters.from_date = parse_filter_date(from_date_input);
        }

        ui.label("To Date");
        if ui
            .add(
                TextEdit::singleline(to_date_input)
                    .hint_text(DATE_HINT)
                    .desired_width(96.0),
            )
            .changed()
        {
            filters.to_date = parse_filter_date(to_date_input);
        }

        if ui.button("Clear Filters").clicked() {
            clear = true;
        }
    });

    if clear {
        from_date_input.clear();
        to_date_input.clear();
        Some(FilterChange::Clear)
    } else if filters != *current {
        Some(FilterChange::Set(filters))
    } else {
        None
    }
}

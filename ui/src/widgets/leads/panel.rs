//! Leads dashboard page.

use chrono::Utc;
use egui::{Button, Response, RichText, Ui};
use leadloop_business::api;
use leadloop_business::table::Navigator;
use log::info;

use super::charts::render_charts;
use super::filter_bar::{FilterChange, render_filter_bar};
use super::state::LeadsPanelState;
use super::stats::render_stats;
use crate::utils::colors::COLOR_ERROR;
use crate::utils::spawn::{Poll, spawn_fetch};
use crate::widgets::DataTableWidget;

/// Starts loading leads from `api_url`.
pub fn fetch_leads(state: &mut LeadsPanelState, api_url: &str, ctx: &egui::Context) {
    info!("Fetching leads from {api_url}");
    state.requested = true;
    state.data.set_fetching();

    let api_url = api_url.to_owned();
    state.pending = Some(spawn_fetch(ctx, async move {
        api::list_leads(&api_url).await
    }));
}

/// Moves a finished fetch into the page state.
pub fn poll_leads(state: &mut LeadsPanelState) {
    let Some(pending) = &state.pending else {
        return;
    };

    match pending.poll() {
        Poll::Ready(Ok(leads)) => state.data.update_leads(leads, Utc::now()),
        Poll::Ready(Err(err)) => state.data.set_error(err.to_string()),
        Poll::Lost => state.data.set_error("Request cancelled"),
        Poll::Waiting => return,
    }
    state.pending = None;
}

/// Displays the leads dashboard. The first call starts the initial fetch.
pub fn leads_panel(
    state: &mut LeadsPanelState,
    api_url: &str,
    navigator: &mut dyn Navigator,
    ui: &mut Ui,
) -> Response {
    poll_leads(state);
    if !state.requested {
        fetch_leads(state, api_url, ui.ctx());
    }

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Lead Management Dashboard");
                ui.label(RichText::new("Track and manage your leads effectively").weak());
            });

            let refresh = ui.add_enabled(!state.data.is_fetching, Button::new("Refresh"));
            if refresh.clicked() {
                fetch_leads(state, api_url, ui.ctx());
            }
            if state.data.is_fetching {
                ui.spinner();
            }
        });

        if let Some(error) = &state.data.error {
            ui.colored_label(COLOR_ERROR, format!("Error: {error}"));
        }

        ui.add_space(8.0);
        render_stats(ui, &state.data.stats());

        ui.add_space(8.0);
        render_charts(ui, &state.data.stats(), state.data.by_source());

        ui.add_space(8.0);
        let sources = state.data.sources();
        let change = render_filter_bar(
            ui,
            state.data.filters(),
            &sources,
            &mut state.from_date_input,
            &mut state.to_date_input,
        );
        match change {
            Some(FilterChange::Set(filters)) => state.data.set_filters(filters),
            Some(FilterChange::Clear) => state.data.clear_filters(),
            None => {}
        }

        ui.add_space(8.0);
        DataTableWidget::new(&state.table, state.data.visible())
            .loading(state.data.is_fetching)
            .id_salt("leads_table")
            .show(ui, &mut state.query, navigator);
    })
    .response
}

#[cfg(test)]
mod leads_panel_test {
    use chrono::Utc;
    use egui_kittest::Harness;
    use kittest::Queryable;
    use leadloop_business::leads::{Lead, LeadFilters, LeadStatus};
    use leadloop_business::table::Navigator;

    use super::leads_panel;
    use crate::widgets::leads::state::LeadsPanelState;

    struct NoNavigation;

    impl Navigator for NoNavigation {
        fn navigate(&mut self, url: &str) {
            panic!("leads rows should not navigate, got {url}");
        }
    }

    fn leads() -> Vec<Lead> {
        serde_json::from_value(serde_json::json!([
            {
                "id": "1", "name": "Rajesh Kumar", "email": "rajesh.k@example.com",
                "phone": "9876543210", "source": "Website", "status": "new",
                "campus": "Guntur", "program": "B.Tech", "interest_level": "hot",
                "created_at": "2024-12-08T10:30:00Z", "conversion_probability": 85
            },
            {
                "id": "4", "name": "Sneha Reddy", "email": "sneha.r@example.com",
                "phone": "9876543213", "source": "Facebook", "status": "converted",
                "interest_level": "hot", "created_at": "2024-11-25T09:00:00Z"
            }
        ]))
        .expect("fixture leads should parse")
    }

    /// A loaded page, so the panel does not start a fetch of its own.
    fn loaded_state() -> LeadsPanelState {
        let mut state = LeadsPanelState::new();
        state.requested = true;
        state.data.update_leads(leads(), Utc::now());
        state
    }

    fn harness(state: LeadsPanelState) -> Harness<'static, LeadsPanelState> {
        Harness::new_ui_state(
            |ui, state: &mut LeadsPanelState| {
                leads_panel(state, "http://test/api", &mut NoNavigation, ui);
            },
            state,
        )
    }

    #[test]
    fn test_panel_shows_stats_and_rows() {
        let mut harness = harness(loaded_state());
        harness.step();

        assert!(harness.query_by_label("Lead Management Dashboard").is_some());
        assert!(harness.query_by_label("Total Leads").is_some());
        assert!(harness.query_by_label("50%").is_some());
        assert!(harness.query_by_label("Rajesh Kumar").is_some());
        assert!(harness.query_by_label("Sneha Reddy").is_some());
        // Missing campus and program render as dashes.
        assert_eq!(harness.query_all_by_label("-").count(), 2);
    }

    #[test]
    fn test_filters_narrow_the_table() {
        let mut state = loaded_state();
        state.data.set_filters(LeadFilters {
            status: Some(LeadStatus::Converted),
            ..LeadFilters::default()
        });
        let mut harness = harness(state);
        harness.step();

        assert!(harness.query_by_label("Sneha Reddy").is_some());
        assert!(harness.query_by_label("Rajesh Kumar").is_none());
        assert!(harness.query_by_label_contains("Showing 1–1 of 1").is_some());
    }

    #[test]
    fn test_clear_filters_button() {
        let mut state = loaded_state();
        state.from_date_input = "2024-12-01".to_owned();
        state.data.set_filters(LeadFilters {
            source: Some("Website".to_owned()),
            ..LeadFilters::default()
        });
        let mut harness = harness(state);
        harness.step();
        assert!(harness.query_by_label("Sneha Reddy").is_none());

        harness.get_by_label("Clear Filters").click();
        harness.step();
        harness.step();

        assert_eq!(harness.state().data.filters(), &LeadFilters::default());
        assert!(harness.state().from_date_input.is_empty());
        assert!(harness.query_by_label("Sneha Reddy").is_some());
    }

    #[test]
    fn test_error_is_shown_with_previous_rows() {
        let mut state = loaded_state();
        state.data.set_error("API returned status: 500");
        let mut harness = harness(state);
        harness.step();

        assert!(
            harness
                .query_by_label_contains("Error: API returned status: 500")
                .is_some()
        );
        assert!(harness.query_by_label("Rajesh Kumar").is_some());
    }

    #[test]
    fn test_charts_count_all_leads() {
        let mut state = loaded_state();
        // Charts ignore the filters, like the stat cards.
        state.data.set_filters(LeadFilters {
            status: Some(LeadStatus::Converted),
            ..LeadFilters::default()
        });
        let mut harness = harness(state);
        harness.step();

        assert!(harness.query_by_label("Status Distribution").is_some());
        assert!(harness.query_by_label("New: 1").is_some());
        assert!(harness.query_by_label("Converted: 1").is_some());
        assert!(harness.query_by_label("Lost: 0").is_some());

        assert!(harness.query_by_label("Interest Level").is_some());
        assert!(harness.query_by_label("Hot: 2").is_some());
        assert!(harness.query_by_label("Cold: 0").is_some());

        assert!(harness.query_by_label("Leads by Source").is_some());
        assert!(harness.query_by_label("Website: 1").is_some());
        assert!(harness.query_by_label("Facebook: 1").is_some());
    }
}

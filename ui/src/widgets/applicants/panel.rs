//! Lead generation page: registered users with their application status.

use chrono::Utc;
use egui::{Button, Response, RichText, Ui};
use leadloop_business::api;
use leadloop_business::table::{Navigator, RowActivation};
use log::{debug, info};

use super::state::ApplicantsPanelState;
use crate::utils::colors::{COLOR_ERROR, COLOR_STAT_TOTAL};
use crate::utils::spawn::{Poll, spawn_fetch};
use crate::widgets::DataTableWidget;
use crate::widgets::stat_card::stat_card;

/// Starts loading applicants, including one status lookup per applicant.
pub fn fetch_applicants(state: &mut ApplicantsPanelState, api_url: &str, ctx: &egui::Context) {
    info!("Fetching applicants from {api_url}");
    state.requested = true;
    state.data.set_fetching();

    let api_url = api_url.to_owned();
    state.pending = Some(spawn_fetch(ctx, async move {
        api::list_applicants(&api_url).await
    }));
}

pub fn poll_applicants(state: &mut ApplicantsPanelState) {
    let Some(pending) = &state.pending else {
        return;
    };

    match pending.poll() {
        Poll::Ready(Ok(applicants)) => state.data.update_applicants(applicants, Utc::now()),
        Poll::Ready(Err(err)) => state.data.set_error(err.to_string()),
        Poll::Lost => state.data.set_error("Request cancelled"),
        Poll::Waiting => return,
    }
    state.pending = None;
}

/// Displays the applicants table. Clicking a row with a known application opens it.
pub fn applicants_panel(
    state: &mut ApplicantsPanelState,
    api_url: &str,
    navigator: &mut dyn Navigator,
    ui: &mut Ui,
) -> Response {
    poll_applicants(state);
    if !state.requested {
        fetch_applicants(state, api_url, ui.ctx());
    }

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Lead Generation");
                ui.label(RichText::new("Registered users and their application status").weak());
            });

            if ui
                .add_enabled(!state.data.is_fetching, Button::new("Refresh"))
                .clicked()
            {
                fetch_applicants(state, api_url, ui.ctx());
            }
            if state.data.is_fetching {
                ui.spinner();
            }
        });

        if let Some(error) = &state.data.error {
            ui.colored_label(COLOR_ERROR, format!("Error: {error}"));
        }

        ui.add_space(8.0);
        stat_card(
            ui,
            "Total Leads",
            state.data.applicants.len().to_string(),
            COLOR_STAT_TOTAL,
        );

        ui.add_space(8.0);
        let activation = DataTableWidget::new(&state.table, &state.data.applicants)
            .loading(state.data.is_fetching)
            .id_salt("applicants_table")
            .show(ui, &mut state.query, navigator);

        if let Some(RowActivation::Suppressed) = activation {
            debug!("Applicant has no viewable application");
        }
    })
    .response
}

mod panel;
mod state;

pub use panel::{applicants_panel, fetch_applicants, poll_applicants};
pub use state::ApplicantsPanelState;

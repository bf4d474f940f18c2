//! Lead generation page: registered users and their application status.

mod columns;
mod model;
mod state;

pub use columns::{APPLICANT_SEARCH_KEYS, applicant_columns, applicant_table};
pub use model::{
    Applicant, ApplicationStatus, ApplicationStatusResponse, LastStep, LastStepResponse,
    ListApplicantsResponse, UNKNOWN_STATUS, application_url,
};
pub use state::ApplicantsState;

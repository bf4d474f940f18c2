use chrono::{DateTime, Utc};
use log::{error, info};

use super::model::Applicant;

/// Lead generation page data.
#[derive(Debug, Clone, Default)]
pub struct ApplicantsState {
    /// Applicants with their application status filled in.
    pub applicants: Vec<Applicant>,

    pub is_fetching: bool,

    /// Error message if the last fetch failed.
    pub error: Option<String>,

    pub last_fetch: Option<DateTime<Utc>>,
}

impl ApplicantsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    pub fn update_applicants(&mut self, applicants: Vec<Applicant>, now: DateTime<Utc>) {
        info!("Loaded {} applicants", applicants.len());
        self.applicants = applicants;
        self.is_fetching = false;
        self.error = None;
        self.last_fetch = Some(now);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("Failed to load applicants: {message}");
        self.error = Some(message);
        self.is_fetching = false;
    }
}

use leadloop_business::ApiResult;
use leadloop_business::applicants::{Applicant, ApplicantsState, applicant_table};
use leadloop_business::table::{DataTable, QueryState};

use crate::utils::spawn::Pending;

/// Everything the lead generation page keeps between frames.
#[derive(Debug)]
pub struct ApplicantsPanelState {
    pub data: ApplicantsState,
    pub table: DataTable<Applicant>,
    pub query: QueryState,
    pub(super) pending: Option<Pending<ApiResult<Vec<Applicant>>>>,
    pub(super) requested: bool,
}

impl Default for ApplicantsPanelState {
    fn default() -> Self {
        Self {
            data: ApplicantsState::new(),
            table: applicant_table(),
            query: QueryState::new(),
            pending: None,
            requested: false,
        }
    }
}

impl ApplicantsPanelState {
    pub fn new() -> Self {
        Self::default()
    }
}

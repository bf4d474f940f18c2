use leadloop_business::ApiResult;
use leadloop_business::leads::{Lead, LeadsState, lead_table};
use leadloop_business::table::{DataTable, QueryState};

use crate::utils::spawn::Pending;

/// Everything the leads page keeps between frames.
#[derive(Debug)]
pub struct LeadsPanelState {
    pub data: LeadsState,
    pub table: DataTable<Lead>,
    pub query: QueryState,
    /// Raw text of the date filter boxes; parsed into the filters on change.
    pub from_date_input: String,
    pub to_date_input: String,
    pub(super) pending: Option<Pending<ApiResult<Vec<Lead>>>>,
    /// Set once the first fetch has been started.
    pub(super) requested: bool,
}

impl Default for LeadsPanelState {
    fn default() -> Self {
        Self {
            data: LeadsState::new(),
            table: lead_table(),
            query: QueryState::new(),
            from_date_input: String::new(),
            to_date_input: String::new(),
            pending: None,
            requested: false,
        }
    }
}

impl LeadsPanelState {
    pub fn new() -> Self {
        Self::default()
    }
}

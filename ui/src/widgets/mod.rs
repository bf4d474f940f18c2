pub mod applicants;
pub mod data_table;
pub mod leads;
pub mod stat_card;

pub use applicants::{ApplicantsPanelState, applicants_panel};
pub use data_table::DataTableWidget;
pub use leads::{LeadsPanelState, leads_panel};

//! Leads dashboard widgets.
//!
//! - `panel`: page layout and fetch lifecycle
//! - `filter_bar`: status / source / interest / date filters
//! - `stats`: headline stat cards
//! - `charts`: status, interest and source distributions
//! - `state`: per-page state kept between frames

mod charts;
mod filter_bar;
mod panel;
mod state;
mod stats;

pub use filter_bar::FilterChange;
pub use panel::{fetch_leads, leads_panel, poll_leads};
pub use state::LeadsPanelState;

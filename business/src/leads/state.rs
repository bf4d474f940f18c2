use chrono::{DateTime, Utc};
use log::{error, info};

use super::filters::{LeadFilters, lead_sources};
use super::model::Lead;
use super::stats::{DashboardStats, SourceCount, source_counts};

/// Leads dashboard data: the fetched collection and what the filters let through.
#[derive(Debug, Clone, Default)]
pub struct LeadsState {
    leads: Vec<Lead>,
    visible: Vec<Lead>,
    filters: LeadFilters,
    stats: DashboardStats,
    by_source: Vec<SourceCount>,
    pub is_fetching: bool,
    pub error: Option<String>,
    pub last_fetch: Option<DateTime<Utc>>,
}

impl LeadsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Leads passing the current filters. This is what the table shows.
    pub fn visible(&self) -> &[Lead] {
        &self.visible
    }

    pub fn filters(&self) -> &LeadFilters {
        &self.filters
    }

    /// Statistics over the whole collection, independent of the filters.
    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    /// Leads per source over the whole collection.
    pub fn by_source(&self) -> &[SourceCount] {
        &self.by_source
    }

    pub fn sources(&self) -> Vec<String> {
        lead_sources(&self.leads)
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    pub fn update_leads(&mut self, leads: Vec<Lead>, now: DateTime<Utc>) {
        info!("Loaded {} leads", leads.len());
        self.stats = DashboardStats::from_leads(&leads);
        self.by_source = source_counts(&leads);
        self.leads = leads;
        self.is_fetching = false;
        self.error = None;
        self.last_fetch = Some(now);
        self.refilter();
    }

    /// Records a failed fetch. The previously loaded leads stay in place.
    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("Failed to load leads: {message}");
        self.is_fetching = false;
        self.error = Some(message);
    }

    pub fn set_filters(&mut self, filters: LeadFilters) {
        if filters != self.filters {
            self.filters = filters;
            self.refilter();
        }
    }

    pub fn clear_filters(&mut self) {
        self.set_filters(LeadFilters::default());
    }

    fn refilter(&mut self) {
        self.visible = self.filters.apply(&self.leads);
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::leads::{LeadStatus, test_leads};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 10, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut state = LeadsState::new();
        assert!(!state.is_fetching);

        state.set_fetching();
        assert!(state.is_fetching);

        state.update_leads(test_leads(), now());
        assert!(!state.is_fetching);
        assert_eq!(state.visible().len(), 6);
        assert_eq!(state.stats().total, 6);
        assert_eq!(state.last_fetch, Some(now()));
    }

    #[test]
    fn test_error_keeps_previous_leads() {
        let mut state = LeadsState::new();
        state.update_leads(test_leads(), now());

        state.set_fetching();
        state.set_error("API returned status: 500");

        assert!(!state.is_fetching);
        assert_eq!(state.error.as_deref(), Some("API returned status: 500"));
        assert_eq!(state.leads().len(), 6);

        state.set_fetching();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_filters_narrow_visible_but_not_stats() {
        let mut state = LeadsState::new();
        state.update_leads(test_leads(), now());

        state.set_filters(LeadFilters {
            status: Some(LeadStatus::New),
            ..LeadFilters::default()
        });
        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.stats().total, 6);
        assert_eq!(state.by_source().len(), 5);

        state.clear_filters();
        assert_eq!(state.visible().len(), 6);
    }

    #[test]
    fn test_reload_reapplies_filters() {
        let mut state = LeadsState::new();
        state.set_filters(LeadFilters {
            source: Some("Website".to_owned()),
            ..LeadFilters::default()
        });

        state.update_leads(test_leads(), now());

        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.sources().len(), 5);
    }
}

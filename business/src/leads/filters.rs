//! Dashboard filters applied before the table's own search.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::model::{InterestLevel, Lead, LeadStatus};

/// Filter bar selections. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilters {
    pub status: Option<LeadStatus>,
    pub source: Option<String>,
    pub interest_level: Option<InterestLevel>,
    /// Leads created at or after midnight UTC of this date.
    pub from_date: Option<NaiveDate>,
    /// Leads created at or before midnight UTC of this date.
    pub to_date: Option<NaiveDate>,
}

impl LeadFilters {
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        self.status.is_none_or(|status| lead.status == status)
            && self.source.as_ref().is_none_or(|source| lead.source == *source)
            && self
                .interest_level
                .is_none_or(|level| lead.interest_level == level)
            && self
                .from_date
                .is_none_or(|date| lead.created_at >= start_of_day(date))
            && self
                .to_date
                .is_none_or(|date| lead.created_at <= start_of_day(date))
    }

    /// Leads passing every active filter, in their original order.
    pub fn apply(&self, leads: &[Lead]) -> Vec<Lead> {
        leads
            .iter()
            .filter(|lead| self.matches(lead))
            .cloned()
            .collect()
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Parses a `YYYY-MM-DD` date typed into a filter box. Blank or malformed input is no filter.
pub fn parse_filter_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Distinct lead sources, sorted, for the source filter options.
pub fn lead_sources(leads: &[Lead]) -> Vec<String> {
    leads
        .iter()
        .map(|lead| lead.source.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::test_leads;

    fn names(leads: &[Lead]) -> Vec<&str> {
        leads.iter().map(|lead| lead.name.as_str()).collect()
    }

    #[test]
    fn test_default_filters_keep_everything() {
        let leads = test_leads();
        let filters = LeadFilters::default();

        assert!(!filters.is_active());
        assert_eq!(filters.apply(&leads).len(), leads.len());
    }

    #[test]
    fn test_status_source_and_interest_filters_combine() {
        let leads = test_leads();
        let filters = LeadFilters {
            status: Some(LeadStatus::New),
            source: Some("Website".to_owned()),
            interest_level: Some(InterestLevel::Warm),
            ..LeadFilters::default()
        };

        assert!(filters.is_active());
        assert_eq!(names(&filters.apply(&leads)), vec!["Ananya Iyer"]);
    }

    #[test]
    fn test_date_bounds_compare_against_midnight() {
        let leads = test_leads();
        let filters = LeadFilters {
            from_date: parse_filter_date("2024-12-07"),
            to_date: parse_filter_date("2024-12-09"),
            ..LeadFilters::default()
        };

        // Created 2024-12-09T08:45 falls after midnight of the upper bound.
        assert_eq!(
            names(&filters.apply(&leads)),
            vec!["Rajesh Kumar", "Priya Sharma"]
        );
    }

    #[test]
    fn test_clear_resets_all_filters() {
        let mut filters = LeadFilters {
            status: Some(LeadStatus::Lost),
            to_date: parse_filter_date("2024-01-01"),
            ..LeadFilters::default()
        };
        filters.clear();
        assert_eq!(filters, LeadFilters::default());
    }

    #[test]
    fn test_parse_filter_date_rejects_garbage() {
        assert_eq!(
            parse_filter_date(" 2024-12-08 "),
            NaiveDate::from_ymd_opt(2024, 12, 8)
        );
        assert_eq!(parse_filter_date(""), None);
        assert_eq!(parse_filter_date("08/12/2024"), None);
    }

    #[test]
    fn test_lead_sources_are_distinct_and_sorted() {
        assert_eq!(
            lead_sources(&test_leads()),
            vec!["Facebook", "Google Ads", "Instagram", "Referral", "Website"]
        );
    }
}

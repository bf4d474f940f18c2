//! Leads dashboard: lead records, filter bar, headline statistics and chart counts.

mod columns;
mod filters;
mod model;
mod state;
mod stats;

pub use columns::{LEAD_SEARCH_KEYS, lead_columns, lead_table};
pub use filters::{LeadFilters, lead_sources, parse_filter_date};
pub use model::{InterestLevel, Lead, LeadStatus, ListLeadsResponse};
pub use state::LeadsState;
pub use stats::{DashboardStats, SourceCount, source_counts};

/// Six leads spread over every status and source.
#[cfg(test)]
pub(crate) fn test_leads() -> Vec<Lead> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "1", "name": "Rajesh Kumar", "email": "rajesh.k@example.com",
            "phone": "9876543210", "source": "Website", "status": "new",
            "campus": "Guntur", "program": "B.Tech", "interest_level": "hot",
            "created_at": "2024-12-08T10:30:00Z", "conversion_probability": 85
        },
        {
            "id": "2", "name": "Priya Sharma", "email": "priya.s@example.com",
            "phone": "9876543211", "source": "Google Ads", "status": "contacted",
            "campus": "Visakhapatnam", "program": "MBA", "interest_level": "warm",
            "created_at": "2024-12-07T14:20:00Z"
        },
        {
            "id": "3", "name": "Amit Patel", "email": "amit.p@example.com",
            "phone": "9876543212", "source": "Referral", "status": "qualified",
            "campus": "Hyderabad", "program": "B.Tech", "interest_level": "hot",
            "created_at": "2024-12-06T11:00:00Z"
        },
        {
            "id": "4", "name": "Sneha Reddy", "email": "sneha.r@example.com",
            "phone": "9876543213", "source": "Facebook", "status": "converted",
            "campus": "Guntur", "program": "B.Tech", "interest_level": "hot",
            "created_at": "2024-11-25T09:00:00Z"
        },
        {
            "id": "5", "name": "Vikram Singh", "email": "vikram.s@example.com",
            "phone": "9876543214", "source": "Instagram", "status": "lost",
            "campus": "Visakhapatnam", "program": "MBA", "interest_level": "cold",
            "created_at": "2024-11-20T15:30:00Z"
        },
        {
            "id": "6", "name": "Ananya Iyer", "email": "ananya.i@example.com",
            "phone": "9876543215", "source": "Website", "status": "new",
            "campus": "Guntur", "program": "B.Tech", "interest_level": "warm",
            "created_at": "2024-12-09T08:45:00Z"
        }
    ]))
    .expect("fixture leads should parse")
}

use super::model::{InterestLevel, Lead, LeadStatus};

/// Headline numbers and chart counts shown above the leads table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub new: usize,
    pub contacted: usize,
    pub qualified: usize,
    pub converted: usize,
    pub lost: usize,
    /// Converted leads as a whole percentage of all leads.
    pub conversion_rate: u32,
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
}

impl DashboardStats {
    pub fn from_leads(leads: &[Lead]) -> Self {
        let count = |status: LeadStatus| leads.iter().filter(|l| l.status == status).count();
        let interest = |level: InterestLevel| {
            leads
                .iter()
                .filter(|l| l.interest_level == level)
                .count()
        };

        let total = leads.len();
        let converted = count(LeadStatus::Converted);
        let conversion_rate = if total == 0 {
            0
        } else {
            (converted as f64 / total as f64 * 100.0).round() as u32
        };

        Self {
            total,
            new: count(LeadStatus::New),
            contacted: count(LeadStatus::Contacted),
            qualified: count(LeadStatus::Qualified),
            converted,
            lost: count(LeadStatus::Lost),
            conversion_rate,
            hot: interest(InterestLevel::Hot),
            warm: interest(InterestLevel::Warm),
            cold: interest(InterestLevel::Cold),
        }
    }

    /// Count for `status`.
    pub fn for_status(&self, status: LeadStatus) -> usize {
        match status {
            LeadStatus::New => self.new,
            LeadStatus::Contacted => self.contacted,
            LeadStatus::Qualified => self.qualified,
            LeadStatus::Converted => self.converted,
            LeadStatus::Lost => self.lost,
        }
    }

    pub fn for_interest(&self, level: InterestLevel) -> usize {
        match level {
            InterestLevel::Hot => self.hot,
            InterestLevel::Warm => self.warm,
            InterestLevel::Cold => self.cold,
        }
    }
}

/// Number of leads from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

/// Leads per source, in order of each source's first appearance.
pub fn source_counts(leads: &[Lead]) -> Vec<SourceCount> {
    let mut counts: Vec<SourceCount> = Vec::new();
    for lead in leads {
        match counts.iter_mut().find(|c| c.source == lead.source) {
            Some(entry) => entry.count += 1,
            None => counts.push(SourceCount {
                source: lead.source.clone(),
                count: 1,
            }),
        }
    }
    counts
}

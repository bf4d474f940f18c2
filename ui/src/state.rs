use leadloop_business::BusinessConfig;

use crate::widgets::{ApplicantsPanelState, LeadsPanelState};

/// Pages reachable from the top bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Leads,
    LeadGeneration,
}

impl Page {
    pub const ALL: [Self; 2] = [Self::Leads, Self::LeadGeneration];

    pub fn title(self) -> &'static str {
        match self {
            Self::Leads => "Leads",
            Self::LeadGeneration => "Lead Generation",
        }
    }
}

/// The main application state.
#[derive(Debug)]
pub struct State {
    pub config: BusinessConfig,
    pub page: Page,
    pub leads: LeadsPanelState,
    pub applicants: ApplicantsPanelState,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            config,
            page: Page::default(),
            leads: LeadsPanelState::new(),
            applicants: ApplicantsPanelState::new(),
        }
    }

    /// State pointed at a mock server.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url))
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }
}

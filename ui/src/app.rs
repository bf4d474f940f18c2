use crate::navigation::BrowserNavigator;
use crate::state::{Page, State};
use crate::widgets;

pub struct LeadLoopApp {
    state: State,
}

impl LeadLoopApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for LeadLoopApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("LeadLoop");
                ui.separator();
                for page in Page::ALL {
                    ui.selectable_value(&mut self.state.page, page, page.title());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let api_url = self.state.config.api_url();
            let mut navigator = BrowserNavigator::new(ctx, &self.state.config.api_base_url);

            egui::ScrollArea::vertical().show(ui, |ui| match self.state.page {
                Page::Leads => {
                    widgets::leads_panel(&mut self.state.leads, &api_url, &mut navigator, ui);
                }
                Page::LeadGeneration => {
                    widgets::applicants_panel(
                        &mut self.state.applicants,
                        &api_url,
                        &mut navigator,
                        ui,
                    );
                }
            });
        });
    }
}

use egui_kittest::Harness;
use leadloop_ui::LeadLoopApp;
use leadloop_ui::state::{Page, State};
use wiremock::MockServer;

/// Frames to run after a network wait so results are polled and painted.
pub const UI_PROPAGATION_FRAMES: usize = 5;

pub struct TestCtx<'a> {
    /// Keeps the mocked endpoints alive for the whole test.
    pub mock_server: MockServer,
    harness: Harness<'a, LeadLoopApp>,
}

impl<'a> TestCtx<'a> {
    /// Starts the app on `page` against `mock_server`. Mount mocks before calling this.
    pub fn new_app(mock_server: MockServer, page: Page) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let state = State::test(mock_server.uri()).with_page(page);
        let app = LeadLoopApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, LeadLoopApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, LeadLoopApp> {
        &self.harness
    }
}

/// Lets spawned fetches reach the mock server, then runs frames to pick up the result.
pub async fn yield_wait_for_network(harness: &mut Harness<'_, LeadLoopApp>) {
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }
}

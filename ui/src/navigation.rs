use leadloop_business::table::Navigator;

/// Performs row navigation as a full page load in the current tab.
///
/// Root-relative URLs are resolved against `origin`. An empty origin keeps
/// them relative, which is what the same-origin web build wants.
pub struct BrowserNavigator {
    ctx: egui::Context,
    origin: String,
}

impl BrowserNavigator {
    pub fn new(ctx: &egui::Context, origin: &str) -> Self {
        Self {
            ctx: ctx.clone(),
            origin: origin.trim_end_matches('/').to_owned(),
        }
    }

    pub fn resolve(&self, url: &str) -> String {
        if url.starts_with('/') {
            format!("{}{url}", self.origin)
        } else {
            url.to_owned()
        }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, url: &str) {
        self.ctx.open_url(egui::OpenUrl::same_tab(self.resolve(url)));
    }
}

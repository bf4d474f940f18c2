//! Row activation targets.

/// Performs a full navigation to a URL.
///
/// In the browser this replaces the current document rather than routing
/// inside the app, so server-rendered state on the target page is reloaded.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Outcome of activating a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowActivation {
    /// The navigator was sent to this URL.
    Navigated(String),
    /// The row URL was empty; nothing happened.
    Suppressed,
    /// The table has no row URL function.
    Disabled,
}

//! Error boundary bookkeeping for route subtrees.
//!
//! DESIGN
//! ======
//! A boundary remembers the last failure it caught and counts render
//! attempts. Retrying clears the failure and bumps the attempt counter; the
//! subtree is rebuilt keyed on that counter, so recovery happens in place
//! without reloading the page.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

/// Hard-navigation target of the "go home" action.
pub const HOME_PATH: &str = "/";

/// Generic headline shown for any caught failure.
pub const FAILURE_TITLE: &str = "Sorry, something went wrong";

/// Supporting line under the headline.
pub const FAILURE_MESSAGE: &str = "We apologize for the inconvenience. The Revolution X team is working on it.";

/// Recovery choices offered by the error screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Re-render the failed subtree in place.
    Retry,
    /// Full navigation to [`HOME_PATH`].
    GoHome,
}

/// Per-boundary failure state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryState {
    pub attempt: u64,
    pub failure: Option<String>,
}

impl BoundaryState {
    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Record a caught failure. The latest failure wins.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("route subtree failed to render (attempt {}): {message}", self.attempt);
        self.failure = Some(message);
    }

    /// Clear the failure and start a new render attempt.
    pub fn retry(&mut self) {
        self.failure = None;
        self.attempt += 1;
    }
}

/// Presentation data for the error screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorScreenModel {
    pub title: &'static str,
    pub message: &'static str,
    pub detail: Option<String>,
}

impl ErrorScreenModel {
    /// Build the screen model. `detail` is kept only when `show_detail` is set.
    pub fn new(failures: &[String], show_detail: bool) -> Self {
        let detail = (show_detail && !failures.is_empty()).then(|| failures.join("\n"));
        Self { title: FAILURE_TITLE, message: FAILURE_MESSAGE, detail }
    }

    /// Screen model for the current build: diagnostics only outside release builds.
    pub fn for_build(failures: &[String]) -> Self {
        Self::new(failures, cfg!(debug_assertions))
    }
}

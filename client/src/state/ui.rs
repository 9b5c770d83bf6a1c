//! Dashboard shell chrome state (sidebar visibility, current path).
//!
//! DESIGN
//! ======
//! Owned by the dashboard layout for the lifetime of its mount and handed to
//! descendants through a scoped context, never a process-wide singleton. No
//! field is persisted across reloads.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::nav::NavigationItem;

/// Viewport width (CSS px) at and above which the sidebar is always shown.
pub const SIDEBAR_BREAKPOINT_PX: f64 = 1024.0;

/// Sidebar state machine phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarPhase {
    #[default]
    Open,
    Closed,
}

/// Transient UI state for the dashboard shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellUiState {
    pub sidebar_open: bool,
    pub current_path: String,
}

impl ShellUiState {
    /// State at shell mount: sidebar open, path taken from the active route.
    pub fn new(current_path: impl Into<String>) -> Self {
        Self { sidebar_open: true, current_path: current_path.into() }
    }

    pub fn phase(&self) -> SidebarPhase {
        if self.sidebar_open { SidebarPhase::Open } else { SidebarPhase::Closed }
    }

    /// `Closed -> Open`. No-op when already open.
    pub fn open(&mut self) {
        self.sidebar_open = true;
    }

    /// `Open -> Closed`. No-op when already closed.
    pub fn close(&mut self) {
        self.sidebar_open = false;
    }

    pub fn toggle(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Record a route change reported by the router.
    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    /// Exact string comparison. A nested path such as
    /// `/dashboard/trading/orders` does not activate `/dashboard/trading`.
    pub fn is_active(&self, item: &NavigationItem) -> bool {
        self.current_path == item.href
    }

    /// First entry whose href equals the current path.
    pub fn active_item<'a>(&self, items: &'a [NavigationItem]) -> Option<&'a NavigationItem> {
        items.iter().find(|item| self.is_active(item))
    }

    /// Whether the sidebar is on screen at the given viewport width.
    /// Wide viewports ignore the open/closed phase.
    pub fn sidebar_visible(&self, viewport_width: f64) -> bool {
        viewport_width >= SIDEBAR_BREAKPOINT_PX || self.sidebar_open
    }

    /// Modifier class for the sidebar element.
    pub fn sidebar_class(&self) -> &'static str {
        match self.phase() {
            SidebarPhase::Open => "sidebar sidebar--open",
            SidebarPhase::Closed => "sidebar sidebar--closed",
        }
    }
}

impl Default for ShellUiState {
    fn default() -> Self {
        Self::new("/dashboard")
    }
}

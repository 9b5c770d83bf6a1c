use super::*;
use crate::state::nav::SIDEBAR_ITEMS;

fn item(href: &str) -> &'static NavigationItem {
    SIDEBAR_ITEMS.iter().find(|i| i.href == href).expect("fixture href exists")
}

// =============================================================
// Mount defaults
// =============================================================

#[test]
fn new_state_starts_open_with_given_path() {
    let state = ShellUiState::new("/dashboard/trading");
    assert!(state.sidebar_open);
    assert_eq!(state.phase(), SidebarPhase::Open);
    assert_eq!(state.current_path, "/dashboard/trading");
}

#[test]
fn default_state_is_dashboard_root_open() {
    let state = ShellUiState::default();
    assert!(state.sidebar_open);
    assert_eq!(state.current_path, "/dashboard");
}

#[test]
fn separate_instances_do_not_share_state() {
    let mut a = ShellUiState::default();
    let b = ShellUiState::default();
    a.close();
    a.set_current_path("/dashboard/signals");
    assert!(b.sidebar_open);
    assert_eq!(b.current_path, "/dashboard");
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn close_then_open_round_trips() {
    let original = ShellUiState::new("/dashboard");
    let mut state = original.clone();
    state.close();
    assert_eq!(state.phase(), SidebarPhase::Closed);
    state.open();
    assert_eq!(state, original);
}

#[test]
fn double_toggle_round_trips() {
    let original = ShellUiState::new("/dashboard/guardian");
    let mut state = original.clone();
    state.toggle();
    assert!(!state.sidebar_open);
    state.toggle();
    assert_eq!(state, original);
}

#[test]
fn open_and_close_are_idempotent() {
    let mut state = ShellUiState::default();
    state.open();
    state.open();
    assert!(state.sidebar_open);
    state.close();
    state.close();
    assert!(!state.sidebar_open);
}

#[test]
fn route_change_keeps_sidebar_phase() {
    let mut state = ShellUiState::default();
    state.close();
    state.set_current_path("/dashboard/trading");
    assert_eq!(state.phase(), SidebarPhase::Closed);
    assert_eq!(state.current_path, "/dashboard/trading");
}

// =============================================================
// Active route
// =============================================================

#[test]
fn exact_path_marks_item_active() {
    let state = ShellUiState::new("/dashboard/trading");
    assert!(state.is_active(item("/dashboard/trading")));
    assert!(!state.is_active(item("/dashboard")));
}

#[test]
fn sub_path_does_not_mark_parent_active() {
    let state = ShellUiState::new("/dashboard/trading/orders");
    assert!(!state.is_active(item("/dashboard/trading")));
    assert_eq!(state.active_item(SIDEBAR_ITEMS), None);
}

#[test]
fn near_miss_strings_are_not_active() {
    for path in ["", "/", "/dashboard/", "/Dashboard", "dashboard", "/dashboard?tab=1"] {
        let state = ShellUiState::new(path);
        assert!(!state.is_active(item("/dashboard")), "{path:?} should not be active");
    }
}

#[test]
fn at_most_one_item_active() {
    for nav in SIDEBAR_ITEMS {
        let state = ShellUiState::new(nav.href);
        let active = SIDEBAR_ITEMS.iter().filter(|i| state.is_active(i)).count();
        assert_eq!(active, 1);
        assert_eq!(state.active_item(SIDEBAR_ITEMS), Some(nav));
    }
}

// =============================================================
// Responsive visibility
// =============================================================

#[test]
fn wide_viewport_ignores_closed_phase() {
    let mut state = ShellUiState::default();
    state.close();
    assert!(state.sidebar_visible(SIDEBAR_BREAKPOINT_PX));
    assert!(state.sidebar_visible(1440.0));
}

#[test]
fn narrow_viewport_follows_phase() {
    let mut state = ShellUiState::default();
    assert!(state.sidebar_visible(375.0));
    state.close();
    assert!(!state.sidebar_visible(375.0));
}

#[test]
fn sidebar_class_tracks_phase() {
    let mut state = ShellUiState::default();
    assert_eq!(state.sidebar_class(), "sidebar sidebar--open");
    state.close();
    assert_eq!(state.sidebar_class(), "sidebar sidebar--closed");
}

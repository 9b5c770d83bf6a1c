use std::collections::HashSet;

use super::*;

#[test]
fn sidebar_hrefs_are_pairwise_distinct() {
    let mut seen = HashSet::new();
    for item in SIDEBAR_ITEMS {
        assert!(seen.insert(item.href), "duplicate href {}", item.href);
    }
}

#[test]
fn sidebar_starts_with_dashboard_root() {
    assert_eq!(SIDEBAR_ITEMS[0].href, "/dashboard");
    assert_eq!(SIDEBAR_ITEMS.len(), 6);
}

#[test]
fn only_users_entry_is_admin_only() {
    let admin_only: Vec<_> = SIDEBAR_ITEMS.iter().filter(|i| i.admin_only).map(|i| i.href).collect();
    assert_eq!(admin_only, vec!["/dashboard/users"]);
}

#[test]
fn standard_role_hides_admin_entries() {
    let items = visible_items(SIDEBAR_ITEMS, ViewerRole::Standard);
    assert_eq!(items.len(), SIDEBAR_ITEMS.len() - 1);
    assert!(items.iter().all(|i| !i.admin_only));
}

#[test]
fn admin_role_sees_everything_in_order() {
    let items = visible_items(SIDEBAR_ITEMS, ViewerRole::Admin);
    let hrefs: Vec<_> = items.iter().map(|i| i.href).collect();
    let expected: Vec<_> = SIDEBAR_ITEMS.iter().map(|i| i.href).collect();
    assert_eq!(hrefs, expected);
}

#[test]
fn default_role_keeps_current_visibility() {
    assert_eq!(ViewerRole::default(), ViewerRole::Admin);
}

#[test]
fn icon_classes_are_distinct() {
    let classes: HashSet<_> = SIDEBAR_ITEMS.iter().map(|i| i.icon.css_class()).collect();
    assert_eq!(classes.len(), SIDEBAR_ITEMS.len());
}

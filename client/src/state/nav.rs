//! Sidebar navigation entries for the dashboard shell.
//!
//! DESIGN
//! ======
//! The entry list is a fixed, ordered `static` table. It is read-only after
//! compilation, so every render can borrow it without coordination.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Icon identifiers for sidebar entries. Rendered as CSS glyph classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    LayoutDashboard,
    TrendingUp,
    Activity,
    Shield,
    Users,
    Settings,
}

impl NavIcon {
    /// CSS modifier class used by the stylesheet to draw the glyph.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::LayoutDashboard => "icon icon--layout-dashboard",
            Self::TrendingUp => "icon icon--trending-up",
            Self::Activity => "icon icon--activity",
            Self::Shield => "icon icon--shield",
            Self::Users => "icon icon--users",
            Self::Settings => "icon icon--settings",
        }
    }
}

/// A single sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
    pub admin_only: bool,
}

/// Dashboard sidebar entries in display order. Hrefs are unique.
pub static SIDEBAR_ITEMS: &[NavigationItem] = &[
    NavigationItem { label: "Dashboard", href: "/dashboard", icon: NavIcon::LayoutDashboard, admin_only: false },
    NavigationItem { label: "Trading", href: "/dashboard/trading", icon: NavIcon::TrendingUp, admin_only: false },
    NavigationItem { label: "Signals", href: "/dashboard/signals", icon: NavIcon::Activity, admin_only: false },
    NavigationItem { label: "AI Guardian", href: "/dashboard/guardian", icon: NavIcon::Shield, admin_only: false },
    NavigationItem { label: "Users", href: "/dashboard/users", icon: NavIcon::Users, admin_only: true },
    NavigationItem { label: "Settings", href: "/dashboard/settings", icon: NavIcon::Settings, admin_only: false },
];

/// Role of the person viewing the shell.
///
/// There is no account system yet, so nothing resolves a real role. The shell
/// renders with [`ViewerRole::default`], which keeps every entry visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewerRole {
    Standard,
    #[default]
    Admin,
}

impl ViewerRole {
    pub fn permits(self, item: &NavigationItem) -> bool {
        !item.admin_only || self == Self::Admin
    }
}

/// Entries the given role may see, in table order.
pub fn visible_items(items: &'static [NavigationItem], role: ViewerRole) -> Vec<&'static NavigationItem> {
    items.iter().filter(|item| role.permits(item)).collect()
}

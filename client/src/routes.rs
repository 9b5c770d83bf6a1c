//! Route table: which screens exist and which layouts wrap them.
//!
//! ARCHITECTURE
//! ============
//! The Leptos router in `app` declares the same tree for rendering. This
//! table is the queryable form of it, used by the shell to label sections
//! and to tell an unknown path apart from a screen that is linked but not
//! built yet. No entry carries a guard; every path is open to every visitor.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Dashboard sub-areas that get their own heading bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Admin,
    Trading,
    Guardian,
}

impl Section {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Admin => "Admin Panel",
            Self::Trading => "Trading",
            Self::Guardian => "AI Guardian",
        }
    }

    pub fn base_path(self) -> &'static str {
        match self {
            Self::Admin => "/dashboard/admin",
            Self::Trading => "/dashboard/trading",
            Self::Guardian => "/dashboard/guardian",
        }
    }

    /// Delivery phase in which the section's content is scheduled.
    pub fn phase(self) -> u8 {
        match self {
            Self::Admin => 2,
            Self::Trading | Self::Guardian => 3,
        }
    }
}

/// Wrapper screens, outermost first in a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Root,
    Auth,
    Dashboard,
    Section(Section),
}

/// Leaf screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Login,
    Register,
    ForgotPassword,
    SetupTwoFactor,
    DashboardHome,
    SectionHome(Section),
    NotFound,
}

/// Whether a route has a screen or is only linked from navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Implemented,
    Referenced,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Literal path, or a prefix ending in `/*` matching any deeper path.
    pub pattern: &'static str,
    pub layouts: &'static [Layout],
    pub screen: Screen,
    pub availability: Availability,
}

const ROOT: &[Layout] = &[Layout::Root];
const AUTH: &[Layout] = &[Layout::Root, Layout::Auth];
const DASHBOARD: &[Layout] = &[Layout::Root, Layout::Dashboard];
const ADMIN: &[Layout] = &[Layout::Root, Layout::Dashboard, Layout::Section(Section::Admin)];
const TRADING: &[Layout] = &[Layout::Root, Layout::Dashboard, Layout::Section(Section::Trading)];
const GUARDIAN: &[Layout] = &[Layout::Root, Layout::Dashboard, Layout::Section(Section::Guardian)];

const fn built(pattern: &'static str, layouts: &'static [Layout], screen: Screen) -> RouteEntry {
    RouteEntry { pattern, layouts, screen, availability: Availability::Implemented }
}

const fn linked(pattern: &'static str) -> RouteEntry {
    RouteEntry { pattern, layouts: DASHBOARD, screen: Screen::NotFound, availability: Availability::Referenced }
}

pub static ROUTES: &[RouteEntry] = &[
    built("/", ROOT, Screen::Landing),
    built("/login", AUTH, Screen::Login),
    built("/register", AUTH, Screen::Register),
    built("/forgot-password", AUTH, Screen::ForgotPassword),
    built("/setup-2fa", AUTH, Screen::SetupTwoFactor),
    built("/dashboard", DASHBOARD, Screen::DashboardHome),
    built("/dashboard/trading", TRADING, Screen::SectionHome(Section::Trading)),
    built("/dashboard/trading/*", TRADING, Screen::SectionHome(Section::Trading)),
    built("/dashboard/admin", ADMIN, Screen::SectionHome(Section::Admin)),
    built("/dashboard/admin/*", ADMIN, Screen::SectionHome(Section::Admin)),
    built("/dashboard/guardian", GUARDIAN, Screen::SectionHome(Section::Guardian)),
    built("/dashboard/guardian/*", GUARDIAN, Screen::SectionHome(Section::Guardian)),
    linked("/dashboard/signals"),
    linked("/dashboard/users"),
    linked("/dashboard/settings"),
];

/// Strip query/fragment and any trailing slash (except on `/`).
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Find the route for `path`. Literal patterns win over `/*` prefixes.
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize_path(path);
    ROUTES.iter().find(|r| r.pattern == path).or_else(|| {
        ROUTES.iter().find(|r| {
            r.pattern
                .strip_suffix("/*")
                .and_then(|prefix| path.strip_prefix(prefix))
                .is_some_and(|rest| rest.starts_with('/'))
        })
    })
}

/// Wrapper chain for `path`, outermost first. Unknown dashboard paths keep
/// the shell so navigation stays available around the not-found screen.
pub fn layouts_for(path: &str) -> &'static [Layout] {
    if let Some(entry) = resolve(path) {
        return entry.layouts;
    }
    let path = normalize_path(path);
    if path.starts_with("/dashboard/") { DASHBOARD } else { ROOT }
}

/// Whether `path` is linked from navigation but has no screen yet.
pub fn is_pending(path: &str) -> bool {
    resolve(path).is_some_and(|r| r.availability == Availability::Referenced)
}

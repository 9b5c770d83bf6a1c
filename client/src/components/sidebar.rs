//! Collapsible dashboard sidebar with navigation links.
//!
//! ARCHITECTURE
//! ============
//! Reads the shell state provided by the dashboard layout. Highlighting uses
//! exact path equality, so nested screens leave their parent entry unlit.
//! `aria-hidden` tracks the viewport width as well as the open flag, since the
//! sidebar is pinned open above the breakpoint.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::routes;
use crate::state::nav::{NavigationItem, SIDEBAR_ITEMS, ViewerRole, visible_items};
use crate::state::ui::ShellUiState;
use crate::util::browser::{hard_navigate, use_viewport_width};

/// Sidebar with brand, navigation list, and logout action.
#[component]
pub fn Sidebar(#[prop(optional)] role: ViewerRole) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellUiState>>();
    let items = visible_items(SIDEBAR_ITEMS, role);

    let width = use_viewport_width();
    let hidden = move || (!shell.with(|s| s.sidebar_visible(width.get()))).to_string();
    let on_logout = move |_| {
        log::info!("logout requested; no session to end");
        hard_navigate("/login");
    };

    view! {
        <aside class=move || shell.with(ShellUiState::sidebar_class) aria-hidden=hidden>
            <div class="sidebar__brand">
                <span class="brand-mark">"X"</span>
                <span class="sidebar__title">"Revolution X"</span>
                <button
                    class="sidebar__close"
                    on:click=move |_| shell.update(ShellUiState::close)
                    title="Close menu"
                    aria-label="Close menu"
                >
                    "✕"
                </button>
            </div>
            <nav class="sidebar__nav">
                {items.into_iter().map(|item| view! { <SidebarLink item=item/> }).collect_view()}
            </nav>
            <div class="sidebar__footer">
                <button class="sidebar__logout" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(item: &'static NavigationItem) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellUiState>>();
    let active = move || shell.with(|s| s.is_active(item));

    view! {
        <a
            href=item.href
            class="sidebar__link"
            class:sidebar__link--active=active
            aria-current=move || active().then_some("page")
        >
            <span class=item.icon.css_class() aria-hidden="true"></span>
            <span class="sidebar__label">{item.label}</span>
            {routes::is_pending(item.href).then(|| view! { <span class="sidebar__badge">"Soon"</span> })}
        </a>
    }
}

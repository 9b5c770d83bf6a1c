//! Dashboard header: menu toggle, system status, latency, notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Status figures come from the [`StatusSource`] in context. A failing source
//! is contained by a local boundary so the rest of the chrome keeps working.
//!
//! [`StatusSource`]: crate::state::status::StatusSource

use leptos::prelude::*;

use crate::state::nav::ViewerRole;
use crate::state::status::SharedStatusSource;
use crate::state::ui::ShellUiState;

/// Top bar of the dashboard shell.
#[component]
pub fn Header(#[prop(optional)] role: ViewerRole) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellUiState>>();
    let source = expect_context::<SharedStatusSource>();

    let status = move || {
        source.snapshot().map(|snap| {
            view! {
                <span class=snap.system.css_class()>
                    <span class="status-pill__dot"></span>
                    <span>{snap.system.label()}</span>
                </span>
                <span class="shell-header__latency">{snap.latency_label()}</span>
            }
        })
    };

    view! {
        <header class="shell-header">
            <button
                class="shell-header__menu"
                on:click=move |_| shell.update(ShellUiState::open)
                title="Open menu"
                aria-label="Open menu"
            >
                "☰"
            </button>
            <div class="shell-header__right">
                <ErrorBoundary fallback=|_| {
                    view! { <span class="status-pill status-pill--down">"Status unavailable"</span> }
                }>{status}</ErrorBoundary>
                <button class="shell-header__bell" title="Notifications" aria-label="Notifications">
                    "🔔"
                    <span class="shell-header__bell-dot"></span>
                </button>
                <div class="shell-header__avatar">{avatar_initial(role)}</div>
            </div>
        </header>
    }
}

pub(crate) fn avatar_initial(role: ViewerRole) -> &'static str {
    match role {
        ViewerRole::Admin => "A",
        ViewerRole::Standard => "U",
    }
}

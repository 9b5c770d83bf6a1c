//! Static card for auth screens that are not available yet.

use leptos::prelude::*;

use crate::components::placeholder::phase_label;

/// Auth features ship in this phase.
const AUTH_PHASE: u8 = 2;

#[component]
pub fn AuthNotice(
    title: &'static str,
    body: &'static str,
    link_href: &'static str,
    link_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card__header">
                <h1>{title}</h1>
                <p class="login-card__subtitle">{phase_label(AUTH_PHASE)}</p>
            </div>
            <div class="login-card">
                <p class="login-card__body">{body}</p>
                <a class="login-card__link" href=link_href>{link_label}</a>
            </div>
        </div>
    }
}

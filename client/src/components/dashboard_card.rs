//! Link card used on the dashboard home grid.

use leptos::prelude::*;

/// A clickable card pointing at a dashboard area.
#[component]
pub fn DashboardCard(title: &'static str, description: &'static str, href: &'static str) -> impl IntoView {
    view! {
        <a class="dashboard-card" href=href>
            <h2 class="dashboard-card__title">{title}</h2>
            <p class="dashboard-card__description">{description}</p>
        </a>
    }
}

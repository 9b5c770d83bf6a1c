//! Dashboard home: entry cards into the main areas.

use leptos::prelude::*;

use crate::components::dashboard_card::DashboardCard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1 class="dashboard-page__title">"Dashboard"</h1>
            <div class="dashboard-page__cards">
                <DashboardCard title="Trading" description="Charts and positions" href="/dashboard/trading"/>
                <DashboardCard title="Signals" description="AI signals" href="/dashboard/signals"/>
                <DashboardCard title="Settings" description="System settings" href="/dashboard/admin/settings"/>
            </div>
        </div>
    }
}

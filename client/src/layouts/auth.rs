//! Wrapper for the login, registration, and recovery screens.

use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="auth-layout">
            <Outlet/>
        </div>
    }
}

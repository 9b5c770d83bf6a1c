//! Two-factor enrollment screen.

use leptos::prelude::*;

use crate::components::auth_notice::AuthNotice;

#[component]
pub fn SetupTwoFactorPage() -> impl IntoView {
    view! {
        <AuthNotice
            title="Set up two-factor authentication"
            body="2FA will be enabled later."
            link_href="/dashboard"
            link_label="Skip to dashboard"
        />
    }
}

//! Registration screen. Accounts are created by administrators for now.

use leptos::prelude::*;

use crate::components::auth_notice::AuthNotice;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <AuthNotice
            title="Create an account"
            body="Registration is only available through the admin panel."
            link_href="/login"
            link_label="Already have an account? Sign in"
        />
    }
}

//! Password recovery screen.

use leptos::prelude::*;

use crate::components::auth_notice::AuthNotice;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! {
        <AuthNotice
            title="Recover your password"
            body="Please contact an administrator to reset your password."
            link_href="/login"
            link_label="Back to sign in"
        />
    }
}

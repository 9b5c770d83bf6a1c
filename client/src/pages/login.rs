//! Login page. Any submission lands on the dashboard until real auth exists.

use leptos::prelude::*;

use crate::state::auth::{LoginForm, LoginOutcome};
use crate::util::browser::hard_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with(LoginForm::submit) {
            LoginOutcome::Redirect(path) => hard_navigate(path),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card__header">
                <h1>"Revolution X"</h1>
                <p class="login-card__subtitle">"Sign in to the system"</p>
            </div>
            <form class="login-card" on:submit=on_submit>
                <label class="login-label">
                    "Email"
                    <input
                        class="login-input"
                        type="email"
                        placeholder="admin@revolution-x.com"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="login-label">
                    "Password"
                    <input
                        class="login-input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <button class="login-button" type="submit">
                    "Sign in"
                </button>
                <div class="login-links">
                    <a href="/forgot-password">"Forgot your password?"</a>
                    <a href="/register">"Create an account"</a>
                </div>
            </form>
        </div>
    }
}

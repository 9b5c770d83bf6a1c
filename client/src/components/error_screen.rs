//! Error screen and the route boundary that shows it.
//!
//! DESIGN
//! ======
//! [`RouteBoundary`] wraps one route subtree. A failure rendered inside it
//! swaps that subtree for [`ErrorScreen`]; everything outside the boundary
//! keeps rendering. "Retry" clears the caught errors and rebuilds the subtree
//! in place; "Go home" does a full navigation to `/`.

#[cfg(test)]
#[path = "error_screen_test.rs"]
mod error_screen_test;

use leptos::prelude::*;

use crate::state::boundary::{BoundaryState, ErrorScreenModel, HOME_PATH, RecoveryAction};
use crate::util::browser::hard_navigate;

const SUPPORT_EMAIL: &str = "support@revolution-x.com";

/// Catches rendering failures in `children` and offers recovery.
#[component]
pub fn RouteBoundary(children: ChildrenFn) -> impl IntoView {
    let boundary = RwSignal::new(BoundaryState::default());
    // Only attempt changes rebuild the subtree; recording a failure must not.
    let attempt = Memo::new(move |_| boundary.with(|b| b.attempt));

    let fallback = move |errors: ArcRwSignal<Errors>| {
        let failures = errors.with(|errs| errs.iter().map(|(_, e)| e.to_string()).collect::<Vec<_>>());
        boundary.update_untracked(|b| b.fail(failures.join("; ")));

        let on_action = Callback::new(move |action: RecoveryAction| recover(action, &errors, boundary));

        view! { <ErrorScreen model=ErrorScreenModel::for_build(&failures) on_action=on_action/> }
    };

    view! {
        <ErrorBoundary fallback=fallback>
            {move || {
                attempt.track();
                children()
            }}
        </ErrorBoundary>
    }
}

/// Apply a recovery choice to one boundary. `Retry` empties the caught errors
/// and bumps the attempt, which rebuilds the subtree in place.
pub(crate) fn recover(action: RecoveryAction, errors: &ArcRwSignal<Errors>, boundary: RwSignal<BoundaryState>) {
    match action {
        RecoveryAction::Retry => {
            errors.set(Errors::default());
            boundary.update(BoundaryState::retry);
        }
        RecoveryAction::GoHome => hard_navigate(HOME_PATH),
    }
}

/// Generic failure screen with retry and go-home actions.
#[component]
pub fn ErrorScreen(model: ErrorScreenModel, on_action: Callback<RecoveryAction>) -> impl IntoView {
    view! {
        <div class="error-screen" role="alert">
            <div class="error-screen__icon" aria-hidden="true">"⚠"</div>
            <h2 class="error-screen__title">{model.title}</h2>
            <p class="error-screen__message">{model.message}</p>
            {model.detail.map(|detail| {
                view! {
                    <div class="error-screen__detail">
                        <p class="error-screen__detail-label">"Error details:"</p>
                        <pre>{detail}</pre>
                    </div>
                }
            })}
            <div class="error-screen__actions">
                <button
                    class="btn btn--primary"
                    on:click=move |_| on_action.run(RecoveryAction::Retry)
                >
                    "Try again"
                </button>
                <button class="btn btn--outline" on:click=move |_| on_action.run(RecoveryAction::GoHome)>
                    "Back to home"
                </button>
            </div>
            <p class="error-screen__support">
                "If the problem persists, please "
                <a href=format!("mailto:{SUPPORT_EMAIL}")>"contact support"</a>
            </p>
        </div>
    }
}

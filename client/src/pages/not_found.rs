//! Fallback screen for paths with no route.
//!
//! Paths that navigation links to but that have no screen yet get a
//! "not available" notice instead of a plain not-found message.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_location;

use crate::components::placeholder::PhasePlaceholder;
use crate::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        {move || {
            let path = location.pathname.get();
            if routes::is_pending(&path) {
                view! { <PhasePlaceholder title="Not available yet" phase=2 note=path/> }.into_any()
            } else {
                view! {
                    <div class="not-found">
                        <h1>"Page not found"</h1>
                        <p>{path}</p>
                        <a href="/dashboard">"Go to dashboard"</a>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

//! "Coming in a later phase" content block.

use leptos::prelude::*;

/// Static message for screens whose functionality is not built yet.
#[component]
pub fn PhasePlaceholder(
    title: &'static str,
    phase: u8,
    #[prop(optional, into)] note: Option<String>,
) -> impl IntoView {
    view! {
        <section class="placeholder">
            <h2 class="placeholder__title">{title}</h2>
            <p class="placeholder__phase">{phase_label(phase)}</p>
            {note.map(|text| view! { <p class="placeholder__note">{text}</p> })}
        </section>
    }
}

pub(crate) fn phase_label(phase: u8) -> String {
    format!("This feature will be enabled in Phase {phase}")
}

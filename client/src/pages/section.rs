//! Placeholder content for the admin, trading, and guardian areas.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::placeholder::PhasePlaceholder;
use crate::routes::Section;

#[component]
fn SectionHome(section: Section) -> impl IntoView {
    let location = use_location();
    let note = move || {
        let path = location.pathname.get();
        (path.trim_end_matches('/') != section.base_path()).then(|| format!("Requested: {path}"))
    };
    view! {
        <PhasePlaceholder title=section.heading() phase=section.phase()/>
        {move || note().map(|text| view! { <p class="placeholder__note">{text}</p> })}
    }
}

#[component]
pub fn AdminHome() -> impl IntoView {
    view! { <SectionHome section=Section::Admin/> }
}

#[component]
pub fn TradingHome() -> impl IntoView {
    view! { <SectionHome section=Section::Trading/> }
}

#[component]
pub fn GuardianHome() -> impl IntoView {
    view! { <SectionHome section=Section::Guardian/> }
}

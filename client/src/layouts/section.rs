//! Heading bars for the admin, trading, and guardian areas.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::routes::Section;

#[component]
fn SectionLayout(section: Section) -> impl IntoView {
    view! {
        <div class="section-layout">
            <nav class="section-layout__bar">
                <h1 class="section-layout__heading">{section.heading()}</h1>
            </nav>
            <Outlet/>
        </div>
    }
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! { <SectionLayout section=Section::Admin/> }
}

#[component]
pub fn TradingLayout() -> impl IntoView {
    view! { <SectionLayout section=Section::Trading/> }
}

#[component]
pub fn GuardianLayout() -> impl IntoView {
    view! { <SectionLayout section=Section::Guardian/> }
}

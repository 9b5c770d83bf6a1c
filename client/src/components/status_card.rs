//! Service health card for the landing page status grid.

use leptos::prelude::*;

use crate::state::status::ServiceCard;

#[component]
pub fn StatusCard(card: ServiceCard) -> impl IntoView {
    view! {
        <div class=card.status.css_class()>
            <h3 class="status-card__title">{card.title}</h3>
            <p class="status-card__description">{card.description}</p>
        </div>
    }
}

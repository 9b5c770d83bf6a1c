//! Public landing page with system status and entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Status cards and the milestone list come from the status source in
//! context; the endpoint list comes from the build-time endpoint config.

use leptos::prelude::*;

use crate::components::status_card::StatusCard;
use crate::config::EndpointConfig;
use crate::state::status::{SharedStatusSource, StatusSnapshot};

#[component]
pub fn LandingPage() -> impl IntoView {
    let source = expect_context::<SharedStatusSource>();
    let endpoints = expect_context::<EndpointConfig>();

    let status = move || source.snapshot().map(|snap| view! { <StatusOverview snap=snap/> });

    view! {
        <div class="landing">
            <div class="landing__brand">
                <span class="brand-mark brand-mark--large">"X"</span>
                <h1 class="landing__title">"Revolution X"</h1>
            </div>
            <p class="landing__tagline">"AI-Powered Trading System for Gold and Metals"</p>

            {status}

            <div class="landing__actions">
                <a class="btn btn--primary" href="/dashboard">"Dashboard"</a>
                <a class="btn btn--outline" href="/login">"Sign in"</a>
            </div>

            <dl class="landing__endpoints">
                <dt>"API"</dt>
                <dd>{endpoints.api_url}</dd>
                <dt>"Realtime"</dt>
                <dd>{endpoints.ws_url}</dd>
            </dl>
        </div>
    }
}

#[component]
fn StatusOverview(snap: StatusSnapshot) -> impl IntoView {
    let phase = format!("Current phase: {}", snap.phase);
    view! {
        <div class="landing__status-grid">
            {snap.services.into_iter().map(|card| view! { <StatusCard card=card/> }).collect_view()}
        </div>
        <div class="landing__phase">
            <h2>{phase}</h2>
            <ul>
                {snap
                    .milestones
                    .into_iter()
                    .map(|m| {
                        view! {
                            <li class="landing__milestone">
                                <span>{if m.done { "✅" } else { "⏳" }}</span>
                                <span>{m.label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

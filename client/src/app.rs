//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::error_screen::RouteBoundary;
use crate::config::EndpointConfig;
use crate::layouts::auth::AuthLayout;
use crate::layouts::dashboard::DashboardLayout;
use crate::layouts::section::{AdminLayout, GuardianLayout, TradingLayout};
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::landing::LandingPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::section::{AdminHome, GuardianHome, TradingHome};
use crate::pages::setup_2fa::SetupTwoFactorPage;
use crate::state::status::{SharedStatusSource, StaticStatusSource};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the read-only status source and endpoint config, then declares
/// the route tree mirrored by [`crate::routes::ROUTES`]. Shell state is not
/// provided here; the dashboard layout owns it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let status: SharedStatusSource = Arc::new(StaticStatusSource);
    provide_context(status);
    provide_context(EndpointConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/revx-ui.css"/>
        <Title text="Revolution X - AI Trading System"/>

        <Router>
            <RouteBoundary>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <ParentRoute path=path!("") view=AuthLayout>
                        <Route path=path!("login") view=LoginPage/>
                        <Route path=path!("register") view=RegisterPage/>
                        <Route path=path!("forgot-password") view=ForgotPasswordPage/>
                        <Route path=path!("setup-2fa") view=SetupTwoFactorPage/>
                    </ParentRoute>
                    <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                        <Route path=path!("") view=DashboardPage/>
                        <ParentRoute path=path!("trading") view=TradingLayout>
                            <Route path=path!("") view=TradingHome/>
                            <Route path=path!("*rest") view=TradingHome/>
                        </ParentRoute>
                        <ParentRoute path=path!("admin") view=AdminLayout>
                            <Route path=path!("") view=AdminHome/>
                            <Route path=path!("*rest") view=AdminHome/>
                        </ParentRoute>
                        <ParentRoute path=path!("guardian") view=GuardianLayout>
                            <Route path=path!("") view=GuardianHome/>
                            <Route path=path!("*rest") view=GuardianHome/>
                        </ParentRoute>
                        <Route path=path!("*rest") view=NotFoundPage/>
                    </ParentRoute>
                </Routes>
            </RouteBoundary>
        </Router>
    }
}

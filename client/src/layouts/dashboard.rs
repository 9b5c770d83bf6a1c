//! Dashboard shell: sidebar + header around the routed content.
//!
//! DESIGN
//! ======
//! The shell state signal is created here and provided as context for this
//! subtree only, so it lives and dies with the layout mount. Route content is
//! wrapped in its own boundary; a failing screen leaves sidebar and header
//! usable.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::error_screen::RouteBoundary;
use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::state::ui::ShellUiState;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let location = use_location();
    let shell = RwSignal::new(ShellUiState::new(location.pathname.get_untracked()));
    provide_context(shell);

    Effect::new(move || {
        let path = location.pathname.get();
        log::debug!("shell route changed to {path}");
        shell.update(|s| s.set_current_path(path));
    });

    view! {
        <div class="shell">
            <Sidebar/>
            <div class="shell__main">
                <Header/>
                <main class="shell__content">
                    <RouteBoundary>
                        <Outlet/>
                    </RouteBoundary>
                </main>
            </div>
        </div>
    }
}

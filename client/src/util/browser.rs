//! Browser window helpers: hard navigation and viewport size.
//!
//! TRADE-OFFS
//! ==========
//! These only act in the browser. SSR and native test builds get inert
//! fallbacks so server rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use leptos::prelude::*;

/// Full page navigation (not a router transition).
pub fn hard_navigate(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                log::warn!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("hard navigation to {href} skipped outside the browser");
    }
}

/// Viewport width used when no browser window is available.
pub const DESKTOP_VIEWPORT_PX: f64 = 1280.0;

/// Current window inner width in CSS px. Outside the browser this reports
/// [`DESKTOP_VIEWPORT_PX`], matching the desktop default.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(DESKTOP_VIEWPORT_PX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DESKTOP_VIEWPORT_PX
    }
}

/// Viewport width as a signal, refreshed on every window `resize`.
///
/// Starts at [`DESKTOP_VIEWPORT_PX`] so server and hydrated markup agree; the
/// real width is read once the component mounts in the browser.
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(DESKTOP_VIEWPORT_PX);
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || set_width.set(viewport_width()));
        let handle = window_event_listener(leptos::ev::resize, move |_| set_width.set(viewport_width()));
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_width;
    width
}

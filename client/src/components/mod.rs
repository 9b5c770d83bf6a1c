//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and content blocks while reading shared
//! state from Leptos context providers.

pub mod auth_notice;
pub mod dashboard_card;
pub mod error_screen;
pub mod header;
pub mod placeholder;
pub mod sidebar;
pub mod status_card;

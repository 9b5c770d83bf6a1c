//! Client-side state modules.
//!
//! ARCHITECTURE
//! ============
//! Plain data types and transitions with no Leptos dependency, so they test
//! natively. Components wrap them in signals at the scope that owns them.

pub mod auth;
pub mod boundary;
pub mod nav;
pub mod status;
pub mod ui;

//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window` lives here, behind the `hydrate` feature,
//! so pages and state stay renderable on the server and testable natively.

pub mod browser;

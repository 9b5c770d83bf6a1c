//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema shared with the server's auth API.

pub mod types;

//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Every
//! member is immutable after startup, so clones share it without locking.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::auth::{AuthProvider, PlaceholderAuth};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, auth: Arc<dyn AuthProvider>) -> Self {
        Self { config: Arc::new(config), auth }
    }

    /// State backed by the placeholder auth provider.
    #[must_use]
    pub fn with_placeholder_auth(config: ServerConfig) -> Self {
        Self::new(config, Arc::new(PlaceholderAuth))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Default config with placeholder auth.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let config = ServerConfig::from_lookup(|_| None).expect("defaults are valid");
        AppState::with_placeholder_auth(config)
    }

    /// Default config with a custom auth provider.
    #[must_use]
    pub fn test_app_state_with_auth(auth: Arc<dyn AuthProvider>) -> AppState {
        let config = ServerConfig::from_lookup(|_| None).expect("defaults are valid");
        AppState::new(config, auth)
    }
}

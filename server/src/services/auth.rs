//! Auth provider seam. Only a placeholder provider exists.
//!
//! DESIGN
//! ======
//! Routes talk to an [`AuthProvider`] and never build responses on their own.
//! [`PlaceholderAuth`] answers every call with [`AuthReply::NotImplemented`];
//! a real credential service replaces it by implementing the same trait.

use async_trait::async_trait;
use revx_client::net::types::AuthApiResponse;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The request body is not valid JSON.
    #[error("invalid JSON body: {0}")]
    InvalidBody(String),

    /// The provider could not be reached.
    #[error("auth provider unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of an auth provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthReply {
    /// No authentication is performed; `received` echoes the submitted body.
    NotImplemented { received: Option<Value> },
}

impl From<AuthReply> for AuthApiResponse {
    fn from(reply: AuthReply) -> Self {
        match reply {
            AuthReply::NotImplemented { received } => Self::not_implemented(received),
        }
    }
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Describe the auth endpoint (`GET`).
    async fn describe(&self) -> Result<AuthReply, AuthError>;

    /// Handle a submitted auth payload (`POST`).
    async fn submit(&self, body: Value) -> Result<AuthReply, AuthError>;
}

/// Stand-in provider that performs no authentication.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAuth;

#[async_trait]
impl AuthProvider for PlaceholderAuth {
    async fn describe(&self) -> Result<AuthReply, AuthError> {
        Ok(AuthReply::NotImplemented { received: None })
    }

    async fn submit(&self, body: Value) -> Result<AuthReply, AuthError> {
        tracing::debug!("auth payload received by placeholder provider");
        Ok(AuthReply::NotImplemented { received: Some(body) })
    }
}

/// Parse a raw request body as JSON.
pub fn parse_body(bytes: &[u8]) -> Result<Value, AuthError> {
    serde_json::from_slice(bytes).map_err(|e| AuthError::InvalidBody(e.to_string()))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

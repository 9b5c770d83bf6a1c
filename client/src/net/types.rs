//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server serializes these exact types, so field order here is the field
//! order on the wire.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Message returned by every auth placeholder response.
pub const AUTH_PLACEHOLDER_MESSAGE: &str = "Auth API - Phase 2";

/// Implementation state reported by the auth API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthApiStatus {
    NotImplemented,
}

/// Body of every auth API response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthApiResponse {
    pub message: String,
    /// Echo of the request body, present on POST only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<serde_json::Value>,
    pub status: AuthApiStatus,
}

impl AuthApiResponse {
    /// Placeholder reply, optionally echoing a request body.
    pub fn not_implemented(received: Option<serde_json::Value>) -> Self {
        Self { message: AUTH_PLACEHOLDER_MESSAGE.to_owned(), received, status: AuthApiStatus::NotImplemented }
    }
}

/// Error body for rejected API requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

//! Endpoint configuration baked in at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_WS_URL: &str = "ws://localhost:8000/ws";

/// Base addresses of the backend HTTP API and its realtime stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub api_url: String,
    pub ws_url: String,
}

impl EndpointConfig {
    /// Read endpoints from the build environment.
    ///
    /// Optional:
    /// - `REVX_API_URL`: default `http://localhost:8000`
    /// - `REVX_WS_URL`: default `ws://localhost:8000/ws`
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("REVX_API_URL"), option_env!("REVX_WS_URL"))
    }

    /// Build from raw values. Blank values fall back to defaults and trailing
    /// slashes are trimmed.
    pub fn from_values(api_url: Option<&str>, ws_url: Option<&str>) -> Self {
        Self { api_url: normalize(api_url, DEFAULT_API_URL), ws_url: normalize(ws_url, DEFAULT_WS_URL) }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn normalize(raw: Option<&str>, default: &str) -> String {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default);
    value.trim_end_matches('/').to_owned()
}

//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use axum::http::HeaderValue;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable did not parse.
    #[error("invalid {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// A CORS origin is not a valid header value.
    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),

    /// Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default `3000`
    /// - `REVX_ENVIRONMENT`: default `development`
    /// - `CORS_ORIGINS`: comma-separated, default local dev origins
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = non_blank("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match non_blank("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidNumber { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let environment = non_blank("REVX_ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned());
        let cors_origins = parse_origins(&non_blank("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_owned()))?;

        Ok(Self { host, port, environment, cors_origins })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// CORS origins as header values. Validated at load time.
    pub fn cors_header_values(&self) -> Vec<HeaderValue> {
        self.cors_origins.iter().filter_map(|o| HeaderValue::from_str(o).ok()).collect()
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| {
            let origin = o.trim_end_matches('/');
            HeaderValue::from_str(origin)
                .map(|_| origin.to_owned())
                .map_err(|_| ConfigError::InvalidOrigin(o.to_owned()))
        })
        .collect()
}

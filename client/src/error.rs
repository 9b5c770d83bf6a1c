//! Error type for failures surfaced while rendering shell screens.

/// Errors a screen can render into an `ErrorBoundary`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    /// A status/telemetry source could not produce a snapshot.
    #[error("status source unavailable: {0}")]
    StatusUnavailable(String),
}

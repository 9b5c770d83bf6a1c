//! System status data for the landing page and dashboard header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens read status through [`StatusSource`]. The only implementation today
//! is [`StaticStatusSource`], which returns fixed figures. A live feed (for
//! example, polling a backend health endpoint) plugs in behind the same trait
//! without touching the views.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::sync::Arc;

use crate::error::ShellError;

/// Health of a single service card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceStatus {
    Operational,
    Pending,
    Error,
}

impl ServiceStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Operational => "status-card status-card--operational",
            Self::Pending => "status-card status-card--pending",
            Self::Error => "status-card status-card--error",
        }
    }
}

/// One card in the landing-page status grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: String,
    pub status: ServiceStatus,
    pub description: String,
}

/// A delivery milestone in the phase checklist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub label: String,
    pub done: bool,
}

/// Overall health shown in the header pill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemHealth {
    Running,
    Degraded,
    Down,
}

impl SystemHealth {
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "System running",
            Self::Degraded => "System degraded",
            Self::Down => "System down",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Running => "status-pill status-pill--running",
            Self::Degraded => "status-pill status-pill--degraded",
            Self::Down => "status-pill status-pill--down",
        }
    }
}

/// Point-in-time status figures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub system: SystemHealth,
    pub latency_ms: Option<u32>,
    pub phase: String,
    pub services: Vec<ServiceCard>,
    pub milestones: Vec<Milestone>,
}

impl StatusSnapshot {
    /// Header latency readout, e.g. `Latency: 23ms`.
    pub fn latency_label(&self) -> String {
        match self.latency_ms {
            Some(ms) => format!("Latency: {ms}ms"),
            None => "Latency: --".to_owned(),
        }
    }
}

/// Anything that can report system status.
pub trait StatusSource {
    /// # Errors
    ///
    /// Returns [`ShellError::StatusUnavailable`] when no snapshot can be produced.
    fn snapshot(&self) -> Result<StatusSnapshot, ShellError>;
}

/// Status source handle provided through Leptos context.
pub type SharedStatusSource = Arc<dyn StatusSource + Send + Sync>;

/// Fixed placeholder figures until monitoring is wired in.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticStatusSource;

impl StatusSource for StaticStatusSource {
    fn snapshot(&self) -> Result<StatusSnapshot, ShellError> {
        Ok(StatusSnapshot {
            system: SystemHealth::Running,
            latency_ms: Some(23),
            phase: "Foundation".to_owned(),
            services: vec![
                card("Backend", ServiceStatus::Operational, "FastAPI + TimescaleDB"),
                card("Frontend", ServiceStatus::Operational, "Leptos + Axum"),
                card("MT5 Connection", ServiceStatus::Pending, "Waiting for Phase 3"),
            ],
            milestones: vec![
                milestone("Docker + TimescaleDB", true),
                milestone("FastAPI Backend", true),
                milestone("Dashboard Frontend", true),
                milestone("User Management (Phase 2)", false),
            ],
        })
    }
}

fn card(title: &str, status: ServiceStatus, description: &str) -> ServiceCard {
    ServiceCard { title: title.to_owned(), status, description: description.to_owned() }
}

fn milestone(label: &str, done: bool) -> Milestone {
    Milestone { label: label.to_owned(), done }
}

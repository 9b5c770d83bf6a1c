//! Login form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no credential check yet. Submitting the form always resolves to
//! the dashboard root; the real auth service will replace [`LoginForm::submit`]
//! with a credential exchange.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Where a completed login lands.
pub const POST_LOGIN_PATH: &str = "/dashboard";

/// Local field state for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Result of submitting the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Hard-navigate to the given path.
    Redirect(&'static str),
}

impl LoginForm {
    /// Accept any input, including empty fields, and redirect to the dashboard.
    pub fn submit(&self) -> LoginOutcome {
        log::info!("login submitted for {:?} (credential check unavailable)", self.email.trim());
        LoginOutcome::Redirect(POST_LOGIN_PATH)
    }
}

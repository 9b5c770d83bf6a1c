//! Auth placeholder routes.
//!
//! `GET` describes the endpoint, `POST` echoes the submitted JSON. Both report
//! `not_implemented` until a real provider is plugged into `AppState`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use revx_client::net::types::{ApiError, AuthApiResponse};

use crate::services::auth::{self as auth_svc, AuthError};
use crate::state::AppState;

pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        AuthError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn error_response(err: AuthError) -> Response {
    let status = auth_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "auth provider failed");
    } else {
        tracing::debug!(error = %err, "auth request rejected");
    }
    (status, Json(ApiError { error: err.to_string() })).into_response()
}

/// `GET /api/auth[/{*rest}]`
pub async fn describe(State(state): State<AppState>) -> Response {
    match state.auth.describe().await {
        Ok(reply) => Json(AuthApiResponse::from(reply)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `POST /api/auth[/{*rest}]`: any JSON body is echoed back as `received`.
pub async fn submit(State(state): State<AppState>, body: Bytes) -> Response {
    let payload = match auth_svc::parse_body(&body) {
        Ok(value) => value,
        Err(e) => return error_response(e),
    };
    match state.auth.submit(payload).await {
        Ok(reply) => Json(AuthApiResponse::from(reply)).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

//! Session Gate Middleware
//!
//! Runs on every request. Anonymous requests for protected paths are sent
//! to the login page; everything else passes through untouched.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use platform::cookie::has_session_cookie;
use std::sync::Arc;

use crate::domain::gate::{GateDecision, GatePolicy};

/// Middleware state
#[derive(Clone)]
pub struct GateState {
    pub policy: Arc<GatePolicy>,
}

impl GateState {
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}

/// Middleware that redirects anonymous requests on protected paths
pub async fn session_gate(
    State(state): State<GateState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let has_session = has_session_cookie(req.headers(), &state.policy.session_cookie_name);

    match state.policy.decide(req.uri().path(), has_session) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::Redirect { location } => {
            tracing::info!(
                path = %req.uri().path(),
                "No session cookie, redirecting to login"
            );
            Redirect::temporary(&location).into_response()
        }
    }
}

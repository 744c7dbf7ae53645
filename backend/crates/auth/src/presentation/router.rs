//! Auth Router

use axum::{Router, middleware, routing::post};
use platform::mail::{EmailProvider, ResendProvider};
use std::sync::Arc;

use crate::application::ResetPasswordMailer;
use crate::application::config::AuthConfig;
use crate::domain::gate::GatePolicy;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{GateState, session_gate};

/// Create the Auth router with the Resend provider
pub fn auth_router(provider: ResendProvider, config: AuthConfig) -> Router {
    auth_router_generic(provider, config)
}

/// Create a generic Auth router for any email provider
pub fn auth_router_generic<P>(provider: P, config: AuthConfig) -> Router
where
    P: EmailProvider + Clone + Send + Sync + 'static,
{
    let mailer = ResetPasswordMailer::new(Arc::new(provider), Arc::new(config.mail.clone()));
    let state = AuthAppState {
        mailer,
        config: Arc::new(config),
    };

    Router::new()
        .route("/password-strength", post(handlers::password_strength))
        .route(
            "/reset-password-email",
            post(handlers::reset_password_email::<P>),
        )
        .with_state(state)
}

/// Put the session gate in front of every route of `app`
///
/// Call this after all routes and the fallback are registered.
pub fn with_session_gate(app: Router, policy: GatePolicy) -> Router {
    app.layer(middleware::from_fn_with_state(
        GateState::new(policy),
        session_gate,
    ))
}

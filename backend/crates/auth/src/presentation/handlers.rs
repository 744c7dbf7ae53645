//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use kernel::validation::{ValidationError, validate};
use platform::mail::EmailProvider;
use platform::password::PasswordStrength;
use std::sync::Arc;

use crate::application::ResetPasswordMailer;
use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    PasswordStrengthRequest, PasswordStrengthResponse, ResetEmailRequest,
};

/// Header carrying the reset hook secret
pub const HOOK_SECRET_HEADER: &str = "x-hook-secret";

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<P>
where
    P: EmailProvider + Send + Sync + 'static,
{
    pub mailer: ResetPasswordMailer<P>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Password Strength
// ============================================================================

/// POST /api/auth/password-strength
pub async fn password_strength(
    payload: Result<Json<PasswordStrengthRequest>, JsonRejection>,
) -> AuthResult<Json<PasswordStrengthResponse>> {
    let Json(req) = payload.map_err(rejection_to_validation)?;

    Ok(Json(PasswordStrength::of(&req.password).into()))
}

// ============================================================================
// Reset Password Email
// ============================================================================

/// POST /api/auth/reset-password-email
///
/// Called by the auth provider once it has issued a reset token.
pub async fn reset_password_email<P>(
    State(state): State<AuthAppState<P>>,
    headers: HeaderMap,
    payload: Result<Json<ResetEmailRequest>, JsonRejection>,
) -> AuthResult<StatusCode>
where
    P: EmailProvider + Send + Sync + 'static,
{
    if let Some(expected) = state.config.reset_hook_secret.as_deref() {
        let provided = headers
            .get(HOOK_SECRET_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if !constant_time_eq(provided.as_bytes(), expected.as_bytes()) {
            return Err(AuthError::HookUnauthorized);
        }
    }

    let Json(req) = payload.map_err(rejection_to_validation)?;
    let req = validate(req, &ResetEmailRequest::schema())?;

    let delivery = state.mailer.send(&req.into()).await?;
    tracing::debug!(?delivery, "Reset hook handled");

    Ok(StatusCode::ACCEPTED)
}

// ============================================================================
// Helper Functions
// ============================================================================

fn rejection_to_validation(rejection: JsonRejection) -> AuthError {
    AuthError::Validation(ValidationError::new(rejection.body_text()))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"secret", b"secret"));
        assert!(!constant_time_eq(b"secret", b"secreT"));
        assert!(!constant_time_eq(b"secret", b"secret2"));
        assert!(!constant_time_eq(b"", b"secret"));
    }
}

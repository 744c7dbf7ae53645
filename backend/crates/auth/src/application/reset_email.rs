//! Reset Password Email Use Case
//!
//! Renders and dispatches the reset-password email.
//!
//! - No API key configured: logs a warning and returns `Delivery::Skipped` without
//!   touching the provider.
//! - Provider failure: logged with full detail, then wrapped in
//!   [`AuthError::EmailSendFailed`], which only ever displays a generic
//!   message.
//! - One attempt per call, no retries.

use std::sync::Arc;

use platform::mail::EmailProvider;

use crate::application::config::MailConfig;
use crate::domain::reset_request::ResetRequest;
use crate::error::{AuthError, AuthResult};

/// What happened to a reset email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Handed to the provider
    Sent,
    /// Email is not configured; nothing was sent
    Skipped,
}

/// Reset password email use case
pub struct ResetPasswordMailer<P>
where
    P: EmailProvider + Send + Sync + 'static,
{
    provider: Arc<P>,
    config: Arc<MailConfig>,
}

impl<P> ResetPasswordMailer<P>
where
    P: EmailProvider + Send + Sync + 'static,
{
    pub fn new(provider: Arc<P>, config: Arc<MailConfig>) -> Self {
        Self { provider, config }
    }

    pub async fn send(&self, request: &ResetRequest) -> AuthResult<Delivery> {
        let Some(api_key) = self.config.api_key.as_ref() else {
            tracing::warn!("Email provider API key not set, skipping reset password email");
            return Ok(Delivery::Skipped);
        };

        let message = request.render(&self.config.from);

        self.provider
            .send(api_key, &message)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to send reset password email");
                AuthError::EmailSendFailed(e)
            })?;

        tracing::info!("Reset password email sent");
        Ok(Delivery::Sent)
    }
}

impl<P> Clone for ResetPasswordMailer<P>
where
    P: EmailProvider + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            config: self.config.clone(),
        }
    }
}

//! Application Configuration
//!
//! Configuration for the Auth application layer.

use platform::mail::{ApiKey, RESEND_BASE_URL};

use crate::domain::gate::GatePolicy;

/// Default sender shown in reset emails
pub const DEFAULT_EMAIL_FROM: &str = "Moneyger <onboarding@resend.dev>";

/// Auth application configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// Which paths need a session cookie
    pub gate: GatePolicy,
    /// Reset email delivery
    pub mail: MailConfig,
    /// Shared secret the auth provider sends in `X-Hook-Secret`.
    /// `None` leaves the reset hook open (local development).
    pub reset_hook_secret: Option<String>,
}

/// Email delivery configuration
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Provider credential. `None` disables sending.
    pub api_key: Option<ApiKey>,
    /// `From` header
    pub from: String,
    /// Provider API root
    pub provider_base_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            from: DEFAULT_EMAIL_FROM.to_string(),
            provider_base_url: RESEND_BASE_URL.to_string(),
        }
    }
}

impl MailConfig {
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

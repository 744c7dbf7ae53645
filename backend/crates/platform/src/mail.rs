//! Transactional Email Provider
//!
//! Provider-agnostic [`EmailProvider`] trait plus the production
//! [`ResendProvider`] client.
//!
//! A provider makes exactly one delivery attempt per call. Delivery, bounce
//! handling and retries belong to the provider service.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Default Resend API endpoint
pub const RESEND_BASE_URL: &str = "https://api.resend.com";

/// Outbound request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A fully rendered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Provider-side failures
///
/// These carry provider details and are meant for logs only.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status
    #[error("Provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The request never got a usable answer
    #[error("Provider transport error: {0}")]
    Transport(String),
}

/// Anything able to deliver an [`EmailMessage`]
#[trait_variant::make(EmailProvider: Send)]
pub trait LocalEmailProvider {
    /// Send one message using `api_key`
    async fn send(&self, api_key: &ApiKey, message: &EmailMessage) -> Result<(), ProviderError>;
}

// ============================================================================
// API key (redacted)
// ============================================================================

/// Provider credential; never printed
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// `None` for empty or whitespace-only input
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Resend
// ============================================================================

/// Resend (https://resend.com) client
#[derive(Debug, Clone)]
pub struct ResendProvider {
    client: reqwest::Client,
    base_url: String,
}

impl ResendProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.base_url)
    }
}

impl EmailProvider for ResendProvider {
    async fn send(&self, api_key: &ApiKey, message: &EmailMessage) -> Result<(), ProviderError> {
        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(api_key.expose())
            .json(message)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "Email accepted by provider");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_blank() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   ").is_none());
        assert_eq!(ApiKey::new(" re_123 ").unwrap().expose(), "re_123");
    }

    #[test]
    fn test_api_key_debug_redaction() {
        let key = ApiKey::new("re_secret").unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("re_secret"));
    }

    #[test]
    fn test_emails_url_trims_trailing_slash() {
        let provider = ResendProvider::new("https://api.resend.com/").unwrap();
        assert_eq!(provider.emails_url(), "https://api.resend.com/emails");
    }

    #[test]
    fn test_message_wire_format() {
        let message = EmailMessage {
            from: "Moneyger <noreply@moneyger.app>".to_string(),
            to: vec!["ada@example.com".to_string()],
            subject: "Reset your password".to_string(),
            html: "<p>Hi</p>".to_string(),
            text: "Hi".to_string(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["to"][0], "ada@example.com");
        assert_eq!(json["subject"], "Reset your password");
    }

    #[tokio::test]
    async fn test_transport_error_when_unreachable() {
        // Grab a free port, then close it again
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = ResendProvider::new(format!("http://{addr}")).unwrap();
        let key = ApiKey::new("re_test").unwrap();
        let message = EmailMessage {
            from: "a@b.co".to_string(),
            to: vec!["c@d.co".to_string()],
            subject: "s".to_string(),
            html: String::new(),
            text: String::new(),
        };

        let result = EmailProvider::send(&provider, &key, &message).await;
        assert!(matches!(result, Err(ProviderError::Transport(_))));
    }
}

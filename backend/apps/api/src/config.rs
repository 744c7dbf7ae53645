//! Server configuration from the environment
//!
//! Every variable is optional. Unset or blank values fall back to the
//! development defaults below.

use std::env;
use std::net::SocketAddr;

use auth::application::config::DEFAULT_EMAIL_FROM;
use auth::domain::gate::{DEFAULT_LOGIN_PATH, DEFAULT_SESSION_COOKIE};
use auth::{AuthConfig, GatePolicy, MailConfig};
use axum::http::HeaderValue;
use platform::mail::{ApiKey, RESEND_BASE_URL};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("BIND_ADDR is not a socket address: {e}"))?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        let gate = GatePolicy {
            session_cookie_name: var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
            login_path: var("LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string()),
            ..GatePolicy::default()
        };

        let mail = MailConfig {
            api_key: var("RESEND_API_KEY").and_then(ApiKey::new),
            from: var("EMAIL_FROM").unwrap_or_else(|| DEFAULT_EMAIL_FROM.to_string()),
            provider_base_url: var("RESEND_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| RESEND_BASE_URL.to_string()),
        };

        Ok(Self {
            bind_addr,
            frontend_origins,
            auth: AuthConfig {
                gate,
                mail,
                reset_hook_secret: var("RESET_HOOK_SECRET"),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.frontend_origins.len(), 1);
        assert_eq!(config.frontend_origins[0], "http://localhost:3000");
        assert_eq!(config.auth.gate.session_cookie_name, "moneyger.session_token");
        assert_eq!(config.auth.gate.login_path, "/login");
        assert!(!config.auth.mail.is_configured());
        assert_eq!(config.auth.mail.from, DEFAULT_EMAIL_FROM);
        assert!(config.auth.reset_hook_secret.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("FRONTEND_ORIGINS", "https://moneyger.app, https://www.moneyger.app"),
            ("SESSION_COOKIE_NAME", "sid"),
            ("RESEND_API_KEY", "re_123"),
            ("EMAIL_FROM", "Moneyger <no-reply@moneyger.app>"),
            ("RESEND_BASE_URL", "http://localhost:9000/"),
            ("RESET_HOOK_SECRET", "s3cret"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.frontend_origins.len(), 2);
        assert_eq!(config.auth.gate.session_cookie_name, "sid");
        assert!(config.auth.mail.is_configured());
        assert_eq!(config.auth.mail.provider_base_url, "http://localhost:9000");
        assert_eq!(config.auth.reset_hook_secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = config(&[("RESEND_API_KEY", "  "), ("RESET_HOOK_SECRET", "")]).unwrap();

        assert!(!config.auth.mail.is_configured());
        assert!(config.auth.reset_hook_secret.is_none());
    }

    #[test]
    fn test_invalid_bind_addr() {
        assert!(config(&[("BIND_ADDR", "not-an-address")]).is_err());
    }
}

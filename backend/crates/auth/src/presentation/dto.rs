//! API DTOs (Data Transfer Objects)

use kernel::validation::{Rules, email, http_url, max_len};
use platform::password::{PasswordStrength, RequirementCheck, StrengthTier};
use serde::{Deserialize, Serialize};

use crate::domain::reset_request::ResetRequest;

const EMAIL_MAX_LENGTH: usize = 254;
const FIRST_NAME_MAX_LENGTH: usize = 100;
const RESET_URL_MAX_LENGTH: usize = 2048;

// ============================================================================
// Password Strength
// ============================================================================

/// Password strength request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrengthRequest {
    #[serde(default)]
    pub password: String,
}

/// Password strength response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrengthResponse {
    pub checks: Vec<RequirementCheck>,
    /// Number of satisfied checks (0-4)
    pub score: u8,
    pub tier: StrengthTier,
    pub color: &'static str,
    pub text: &'static str,
}

impl From<PasswordStrength> for PasswordStrengthResponse {
    fn from(strength: PasswordStrength) -> Self {
        Self {
            checks: strength.checks,
            score: strength.score,
            tier: strength.tier,
            color: strength.tier.color(),
            text: strength.tier.text(),
        }
    }
}

// ============================================================================
// Reset Password Email (auth provider hook)
// ============================================================================

/// Reset password email request, sent by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetEmailRequest {
    pub email: String,
    pub first_name: String,
    pub reset_url: String,
}

impl ResetEmailRequest {
    pub fn schema() -> Rules<Self> {
        Rules::new()
            .field(|r: &Self| r.email.as_str(), email("email"))
            .field(|r: &Self| r.email.as_str(), max_len("email", EMAIL_MAX_LENGTH))
            .field(
                |r: &Self| r.first_name.as_str(),
                max_len("firstName", FIRST_NAME_MAX_LENGTH),
            )
            .field(|r: &Self| r.reset_url.as_str(), http_url("resetUrl"))
            .field(
                |r: &Self| r.reset_url.as_str(),
                max_len("resetUrl", RESET_URL_MAX_LENGTH),
            )
    }
}

impl From<ResetEmailRequest> for ResetRequest {
    fn from(req: ResetEmailRequest) -> Self {
        ResetRequest::new(req.email, req.first_name, req.reset_url)
    }
}

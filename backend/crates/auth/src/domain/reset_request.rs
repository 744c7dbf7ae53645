//! Reset Request
//!
//! The data needed to send one reset-password email, and the email itself.

use platform::mail::EmailMessage;

pub const RESET_EMAIL_SUBJECT: &str = "Reset your password";

/// Greeting name used when none was given
const FALLBACK_NAME: &str = "there";

/// One reset-password email to send; not persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetRequest {
    pub email: String,
    pub first_name: String,
    pub reset_url: String,
}

impl ResetRequest {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        reset_url: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into().trim().to_string(),
            first_name: first_name.into().trim().to_string(),
            reset_url: reset_url.into().trim().to_string(),
        }
    }

    /// Render the reset-password email addressed from `from`
    pub fn render(&self, from: &str) -> EmailMessage {
        let name = if self.first_name.is_empty() {
            FALLBACK_NAME
        } else {
            self.first_name.as_str()
        };

        EmailMessage {
            from: from.to_string(),
            to: vec![self.email.clone()],
            subject: RESET_EMAIL_SUBJECT.to_string(),
            html: render_html(&escape_html(name), &escape_html(&self.reset_url)),
            text: render_text(name, &self.reset_url),
        }
    }
}

fn render_html(name: &str, url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <body style="background-color:#f6f9fc;font-family:-apple-system,'Segoe UI',Roboto,sans-serif;padding:10px 0">
    <div style="background-color:#ffffff;border:1px solid #f0f0f0;margin:0 auto;max-width:480px;padding:45px">
      <h1 style="font-size:20px;color:#111827">Moneyger</h1>
      <p style="font-size:16px;color:#404040;line-height:26px">Hi {name},</p>
      <p style="font-size:16px;color:#404040;line-height:26px">Someone recently requested a password change for your Moneyger account. If this was you, you can set a new password here:</p>
      <a href="{url}" style="background-color:#059669;border-radius:4px;color:#ffffff;display:block;font-size:15px;text-align:center;text-decoration:none;width:210px;padding:14px 7px">Reset password</a>
      <p style="font-size:16px;color:#404040;line-height:26px">If you don't want to change your password or didn't request this, just ignore and delete this message.</p>
      <p style="font-size:16px;color:#404040;line-height:26px">To keep your account secure, please don't forward this email to anyone.</p>
    </div>
  </body>
</html>
"#
    )
}

fn render_text(name: &str, url: &str) -> String {
    format!(
        "Hi {name},\n\n\
         Someone recently requested a password change for your Moneyger account. \
         If this was you, you can set a new password here:\n\n\
         {url}\n\n\
         If you don't want to change your password or didn't request this, \
         just ignore and delete this message.\n\n\
         To keep your account secure, please don't forward this email to anyone.\n"
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

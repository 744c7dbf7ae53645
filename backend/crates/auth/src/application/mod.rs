//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod reset_email;

// Re-exports
pub use config::{AuthConfig, MailConfig};
pub use reset_email::{Delivery, ResetPasswordMailer};

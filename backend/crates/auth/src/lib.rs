//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Gate policy and the reset-password email model
//! - `application/` - Configuration and the reset email use case
//! - `presentation/` - HTTP handlers, DTOs, router, session gate middleware
//!
//! ## Features
//! - Session gate: anonymous navigations to protected pages go to `/login`
//! - Password strength meter endpoint
//! - Reset-password email hook for the auth provider
//!
//! ## Security Model
//! - Sessions are issued and verified by the auth provider; the gate only
//!   checks that a session cookie is present
//! - Email provider errors never reach API responses

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, MailConfig};
pub use domain::gate::GatePolicy;
pub use error::{AuthError, AuthResult};
pub use presentation::router::{auth_router, auth_router_generic, with_session_gate};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

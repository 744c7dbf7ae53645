//! Domain Layer
//!
//! Pure gate policy and the reset-password email model.

pub mod gate;
pub mod reset_request;

// Re-exports
pub use gate::{GateDecision, GatePolicy, PathClass};
pub use reset_request::ResetRequest;

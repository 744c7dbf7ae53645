//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of Moneyger's vocabulary:
//! - Common error types and result aliases
//! - Request validation against caller-supplied schemas
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod validation;

//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie inspection (session cookie presence)
//! - Password strength evaluation for the signup and reset forms
//! - Transactional email provider client

pub mod cookie;
pub mod mail;
pub mod password;

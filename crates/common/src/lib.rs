//! Types and defaults shared by the caller and the voice webhook.

#![warn(clippy::pedantic)]

/// Module for fixed call-routing defaults
pub mod config;

/// Module for provider account credentials
pub mod credentials;

/// Module for secret types that prevent accidental logging
pub mod secret;

/// Module for common data types
pub mod types;

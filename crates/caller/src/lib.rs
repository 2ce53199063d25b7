//! Outbound call trigger.
//!
//! Places one call through the telephony provider's REST API. The provider
//! then fetches the configured callback URL (served by `voice-webhook`) to
//! learn what to do with the call.
//!
//! # Modules
//!
//! - `config` - Explicit configuration; credentials come from the environment
//! - `errors` - Error types for provider calls
//! - `services` - Provider client and the `CallPlacer` seam

pub mod config;
pub mod errors;
pub mod services;

pub use services::place_call;

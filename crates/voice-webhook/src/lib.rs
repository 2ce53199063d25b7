//! Voice Webhook Service Library
//!
//! The provider fetches this service's single route when an outbound call
//! connects and receives a TwiML document telling it to bridge the call.
//!
//! # Architecture
//!
//! ```text
//! routes/mod.rs -> handlers/voice.rs -> twiml.rs
//! ```
//!
//! # Modules
//!
//! - `config` - Bind address and dial target
//! - `handlers` - HTTP request handlers
//! - `routes` - Axum router setup
//! - `twiml` - Call-control document builder

pub mod config;
pub mod handlers;
pub mod routes;
pub mod twiml;

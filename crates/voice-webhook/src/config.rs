//! Voice webhook configuration.
//!
//! Both fields are fixed defaults from [`common::config`]; nothing is read
//! from the environment.

use common::config::{DEFAULT_TO_NUMBER, DEFAULT_WEBHOOK_BIND_ADDRESS};
use common::types::PhoneNumber;

/// Voice webhook configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: "0.0.0.0:5000").
    pub bind_address: String,

    /// Number every incoming call is bridged to.
    pub dial_number: PhoneNumber,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_WEBHOOK_BIND_ADDRESS.to_string(),
            dial_number: PhoneNumber::new(DEFAULT_TO_NUMBER),
        }
    }
}

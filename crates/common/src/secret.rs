//! Secret types for protecting sensitive values from accidental logging.
//!
//! This module re-exports types from the [`secrecy`] crate. Use these types
//! for the provider auth token and anything else that must not reach a log
//! line.
//!
//! `SecretString` implements `Debug` with redaction, so any struct that
//! derives `Debug` over a secret field gets safe logging for free. The inner
//! value is zeroized on drop.
//!
//! # Example
//!
//! ```rust
//! use common::secret::{ExposeSecret, SecretString};
//!
//! #[derive(Debug)]
//! struct Account {
//!     sid: String,
//!     token: SecretString,
//! }
//!
//! let account = Account {
//!     sid: "AC123".to_string(),
//!     token: SecretString::from("hunter2"),
//! };
//!
//! // Safe: token is redacted
//! println!("{:?}", account);
//!
//! // Reading the value is always an explicit call
//! let token: &str = account.token.expose_secret();
//! # assert_eq!(token, "hunter2");
//! ```

pub use secrecy::{ExposeSecret, SecretString};

//! # Voice Webhook Test Utilities
//!
//! Provides `TestWebhookServer`, a real voice-webhook instance bound to a
//! random loopback port.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use voice_webhook_test_utils::*;
//!
//! #[tokio::test]
//! async fn test_example() -> anyhow::Result<()> {
//!     let server = TestWebhookServer::spawn().await?;
//!
//!     let response = reqwest::Client::new()
//!         .post(server.webhook_url())
//!         .send()
//!         .await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

pub mod server_harness;

pub use server_harness::*;

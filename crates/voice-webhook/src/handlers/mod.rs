//! HTTP request handlers for the voice webhook.

pub mod voice;

pub use voice::voice_webhook;

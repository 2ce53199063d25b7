//! Service layer for the caller.
//!
//! # Components
//!
//! - `twilio_client` - HTTP client for the provider's Calls resource
//! - `mock` - In-memory `CallPlacer` for unit tests

#[cfg(test)]
mod mock;
pub mod twilio_client;

pub use twilio_client::TwilioClient;

use crate::config::Config;
use crate::errors::CallerError;
use common::types::{CallSid, PhoneNumber};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Outbound call parameters, form-encoded with the provider's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    /// Number to ring.
    #[serde(rename = "To")]
    pub to: PhoneNumber,

    /// Provider-owned caller ID.
    #[serde(rename = "From")]
    pub from: PhoneNumber,

    /// URL the provider fetches for call-control instructions.
    #[serde(rename = "Url")]
    pub url: String,
}

impl CallRequest {
    /// Build the request described by `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            to: config.to_number.clone(),
            from: config.from_number.clone(),
            url: config.callback_url.clone(),
        }
    }
}

/// The part of the provider's call resource the caller reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallRecord {
    /// Provider-assigned call identifier.
    pub sid: CallSid,

    /// Initial call status (typically `queued`).
    #[serde(default)]
    pub status: Option<String>,
}

/// Places outbound calls (enables mocking).
#[async_trait::async_trait]
pub trait CallPlacer: Send + Sync {
    /// Ask the provider to place one call. Never retried.
    async fn create_call(&self, request: &CallRequest) -> Result<CallRecord, CallerError>;
}

/// Place the call described by `config` and return its SID.
///
/// Issues exactly one request through `placer`.
#[instrument(skip_all, fields(to = %config.to_number, from = %config.from_number))]
pub async fn place_call(placer: &dyn CallPlacer, config: &Config) -> Result<CallSid, CallerError> {
    let request = CallRequest::from_config(config);
    let record = placer.create_call(&request).await?;

    info!(
        target: "caller.services",
        call_sid = %record.sid,
        status = record.status.as_deref().unwrap_or("unknown"),
        "Call created"
    );

    Ok(record.sid)
}

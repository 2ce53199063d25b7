//! Provider REST client for the Calls resource.
//!
//! One request per call: `POST /2010-04-01/Accounts/{AccountSid}/Calls.json`
//! with HTTP basic auth and a form-encoded body. Nothing is retried; every
//! failure is mapped to a [`CallerError`] and returned.
//!
//! # Security
//!
//! - The auth token is only exposed when building the Authorization header
//! - Provider error bodies are truncated and logged at trace level only
//! - Timeouts prevent hanging connections

use super::{CallPlacer, CallRecord, CallRequest};
use crate::errors::{truncate_body, CallerError};
use common::credentials::ProviderCredentials;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, instrument, trace, warn};

/// Default timeout for provider requests in seconds.
const PROVIDER_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default connect timeout in seconds.
const PROVIDER_CONNECT_TIMEOUT_SECS: u64 = 5;

/// REST API version segment.
const API_VERSION: &str = "2010-04-01";

/// Error document the provider returns alongside 4xx statuses.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    code: Option<i64>,

    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the provider's Calls endpoint.
#[derive(Clone)]
pub struct TwilioClient {
    /// HTTP client with configured timeouts.
    client: Client,

    /// API base URL without a trailing slash.
    base_url: String,

    credentials: ProviderCredentials,
}

impl std::fmt::Debug for TwilioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioClient")
            .field("base_url", &self.base_url)
            .field("account_sid", &self.credentials.account_sid)
            .field("auth_token", &"[REDACTED]")
            .finish()
    }
}

impl TwilioClient {
    /// Create a new provider client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API base URL (e.g., "https://api.twilio.com")
    /// * `credentials` - Account SID and auth token for basic auth
    ///
    /// # Errors
    ///
    /// Returns `CallerError::Configuration` if the HTTP client cannot be built.
    pub fn new(base_url: &str, credentials: ProviderCredentials) -> Result<Self, CallerError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(PROVIDER_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(PROVIDER_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                error!(target: "caller.services.twilio_client", error = %e, "Failed to build HTTP client");
                CallerError::Configuration(e.to_string())
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// URL of the Calls collection for the configured account.
    pub fn calls_url(&self) -> String {
        format!(
            "{}/{}/Accounts/{}/Calls.json",
            self.base_url, API_VERSION, self.credentials.account_sid
        )
    }

    /// Map a provider response onto a call record or an error.
    async fn handle_response(&self, response: reqwest::Response) -> Result<CallRecord, CallerError> {
        let status = response.status();

        if status.is_success() {
            return response.json().await.map_err(|e| {
                warn!(target: "caller.services.twilio_client", error = %e, "Failed to parse call resource");
                CallerError::InvalidResponse(e.to_string())
            });
        }

        // Read response body for diagnostics, but only log at trace level
        let body = response.text().await.unwrap_or_else(|e| {
            trace!(target: "caller.services.twilio_client", error = %e, "Failed to read error response body");
            String::new()
        });
        trace!(
            target: "caller.services.twilio_client",
            body = %truncate_body(&body),
            "Provider error response body"
        );

        if status.as_u16() == 401 || status.as_u16() == 403 {
            warn!(target: "caller.services.twilio_client", status = %status, "Provider rejected credentials");
            Err(CallerError::AuthenticationRejected(status.as_u16()))
        } else if status.is_server_error() {
            warn!(target: "caller.services.twilio_client", status = %status, "Provider returned server error");
            Err(CallerError::ProviderUnavailable(status.as_u16()))
        } else {
            let parsed: Option<ProviderErrorBody> = serde_json::from_str(&body).ok();
            let code = parsed.as_ref().and_then(|b| b.code);
            let message = parsed
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("Unexpected status: {status}"));

            warn!(
                target: "caller.services.twilio_client",
                status = %status,
                code = ?code,
                "Provider rejected call request"
            );
            Err(CallerError::Rejected {
                status: status.as_u16(),
                code,
                message: truncate_body(&message),
            })
        }
    }
}

#[async_trait::async_trait]
impl CallPlacer for TwilioClient {
    #[instrument(skip_all, fields(to = %request.to, from = %request.from))]
    async fn create_call(&self, request: &CallRequest) -> Result<CallRecord, CallerError> {
        let url = self.calls_url();

        debug!(
            target: "caller.services.twilio_client",
            account_sid = %self.credentials.account_sid,
            callback_url = %request.url,
            "Requesting outbound call"
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(
                &self.credentials.account_sid,
                Some(self.credentials.auth_token()),
            )
            .form(request)
            .send()
            .await
            .map_err(|e| {
                warn!(target: "caller.services.twilio_client", error = %e, "Provider request failed");
                CallerError::Http(e.to_string())
            })?;

        self.handle_response(response).await
    }
}

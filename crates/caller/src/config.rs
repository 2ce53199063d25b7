//! Caller configuration.
//!
//! Only the provider credentials are read from the environment. The call
//! parameters are named fields filled from [`common::config`] defaults.
//! The auth token is redacted in Debug output.

use common::config::{DEFAULT_CALLBACK_URL, DEFAULT_FROM_NUMBER, DEFAULT_TO_NUMBER};
use common::credentials::ProviderCredentials;
use common::secret::SecretString;
use common::types::PhoneNumber;
use std::collections::HashMap;
use std::env;
use std::fmt;
use thiserror::Error;

/// Environment variable holding the provider account SID.
pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";

/// Environment variable holding the provider auth token.
pub const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";

/// Provider REST API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com";

/// Everything needed to place the outbound call.
#[derive(Clone)]
pub struct Config {
    /// Provider account credentials.
    pub credentials: ProviderCredentials,

    /// Provider-owned number the call is placed from.
    pub from_number: PhoneNumber,

    /// Number that gets rung.
    pub to_number: PhoneNumber,

    /// URL the provider fetches for call-control instructions.
    pub callback_url: String,

    /// Provider REST API base URL (default: `https://api.twilio.com`).
    pub api_base_url: String,
}

/// Custom Debug implementation that redacts sensitive fields.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account_sid", &self.credentials.account_sid)
            .field("auth_token", &"[REDACTED]")
            .field("from_number", &self.from_number)
            .field("to_number", &self.to_number)
            .field("callback_url", &self.callback_url)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Missing required configuration field: {0}")]
    MissingField(&'static str),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    ///
    /// An empty value counts as missing.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let account_sid = required_var(vars, ACCOUNT_SID_VAR)?;
        let auth_token = required_var(vars, AUTH_TOKEN_VAR)?;

        Self::builder()
            .with_account_sid(account_sid)
            .with_auth_token(SecretString::from(auth_token))
            .with_from_number(PhoneNumber::new(DEFAULT_FROM_NUMBER))
            .with_to_number(PhoneNumber::new(DEFAULT_TO_NUMBER))
            .with_callback_url(DEFAULT_CALLBACK_URL)
            .build()
    }

    /// Start an empty builder. Every field except the API base URL must be set.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

fn required_var(vars: &HashMap<String, String>, name: &str) -> Result<String, ConfigError> {
    vars.get(name)
        .filter(|value| !value.is_empty())
        .cloned()
        .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Builder for [`Config`] with an explicit error per missing field.
#[derive(Default)]
pub struct ConfigBuilder {
    account_sid: Option<String>,
    auth_token: Option<SecretString>,
    from_number: Option<PhoneNumber>,
    to_number: Option<PhoneNumber>,
    callback_url: Option<String>,
    api_base_url: Option<String>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn with_account_sid(mut self, account_sid: impl Into<String>) -> Self {
        self.account_sid = Some(account_sid.into());
        self
    }

    #[must_use]
    pub fn with_auth_token(mut self, auth_token: SecretString) -> Self {
        self.auth_token = Some(auth_token);
        self
    }

    #[must_use]
    pub fn with_from_number(mut self, from_number: PhoneNumber) -> Self {
        self.from_number = Some(from_number);
        self
    }

    #[must_use]
    pub fn with_to_number(mut self, to_number: PhoneNumber) -> Self {
        self.to_number = Some(to_number);
        self
    }

    #[must_use]
    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    /// Point the client somewhere other than the public API (tests, proxies).
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = Some(api_base_url.into());
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming the first unset field, in
    /// the order account_sid, auth_token, from_number, to_number, callback_url.
    pub fn build(self) -> Result<Config, ConfigError> {
        let account_sid = self
            .account_sid
            .ok_or(ConfigError::MissingField("account_sid"))?;
        let auth_token = self
            .auth_token
            .ok_or(ConfigError::MissingField("auth_token"))?;
        let from_number = self
            .from_number
            .ok_or(ConfigError::MissingField("from_number"))?;
        let to_number = self
            .to_number
            .ok_or(ConfigError::MissingField("to_number"))?;
        let callback_url = self
            .callback_url
            .ok_or(ConfigError::MissingField("callback_url"))?;
        let api_base_url = self
            .api_base_url
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Config {
            credentials: ProviderCredentials::new(account_sid, auth_token),
            from_number,
            to_number,
            callback_url,
            api_base_url,
        })
    }
}

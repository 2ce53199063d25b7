//! Provider account credentials.

use crate::secret::{ExposeSecret, SecretString};

/// Account SID and auth token for the telephony provider.
///
/// The token is held as a [`SecretString`], so the derived `Debug` never
/// prints it.
#[derive(Debug, Clone)]
pub struct ProviderCredentials {
    /// Account identifier, also the basic-auth username.
    pub account_sid: String,

    /// Auth token, the basic-auth password.
    pub auth_token: SecretString,
}

impl ProviderCredentials {
    #[must_use]
    pub fn new(account_sid: String, auth_token: SecretString) -> Self {
        Self {
            account_sid,
            auth_token,
        }
    }

    /// Borrow the token for an outgoing request.
    #[must_use]
    pub fn auth_token(&self) -> &str {
        self.auth_token.expose_secret()
    }
}

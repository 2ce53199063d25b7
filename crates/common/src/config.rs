//! Fixed call-routing values.
//!
//! These are the only numbers and URLs the system knows about. They are
//! surfaced as fields on each binary's `Config` so callers pass them
//! explicitly, but nothing reads them from the environment.

/// Number the outbound call rings, and the number the webhook bridges to.
pub const DEFAULT_TO_NUMBER: &str = "+14379084824";

/// Provider-owned number the outbound call is placed from.
pub const DEFAULT_FROM_NUMBER: &str = "+16476950950";

/// Public URL the provider fetches for call-control instructions.
pub const DEFAULT_CALLBACK_URL: &str = "https://cyberguardng.ca/voice-webhook";

/// Path of the webhook route. Must match the path of [`DEFAULT_CALLBACK_URL`].
pub const VOICE_WEBHOOK_PATH: &str = "/voice-webhook";

/// Address the webhook binds to.
pub const DEFAULT_WEBHOOK_BIND_ADDRESS: &str = "0.0.0.0:5000";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_url_targets_webhook_path() {
        assert!(DEFAULT_CALLBACK_URL.ends_with(VOICE_WEBHOOK_PATH));
        assert!(DEFAULT_CALLBACK_URL.starts_with("https://"));
    }

    #[test]
    fn test_numbers_are_e164() {
        for number in [DEFAULT_TO_NUMBER, DEFAULT_FROM_NUMBER] {
            assert!(number.starts_with('+'));
            assert!(number.chars().skip(1).all(|c| c.is_ascii_digit()));
        }
    }
}

//! Caller error types.
//!
//! Provider error bodies can echo request data back, so anything taken from
//! a response body is truncated before it lands in an error or a log line.

use thiserror::Error;

/// Maximum length for provider text carried in errors.
pub const MAX_ERROR_BODY_LEN: usize = 256;

/// Errors from placing a call.
#[derive(Debug, Error)]
pub enum CallerError {
    /// The request never got a response (connect failure, timeout).
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Provider rejected the account credentials (401, 403).
    #[error("Authentication rejected: status {0}")]
    AuthenticationRejected(u16),

    /// Provider refused the call request (other 4xx).
    #[error("Call request rejected: status {status}{}: {message}", code_suffix(.code))]
    Rejected {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    /// Provider returned 5xx.
    #[error("Provider unavailable: status {0}")]
    ProviderUnavailable(u16),

    /// 2xx response whose body could not be read as a call resource.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    /// The HTTP client could not be constructed.
    #[error("Client configuration error: {0}")]
    Configuration(String),
}

fn code_suffix(code: &Option<i64>) -> String {
    code.map(|code| format!(", code {code}")).unwrap_or_default()
}

/// Cut provider text down to [`MAX_ERROR_BODY_LEN`] bytes on a char boundary.
pub fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body.to_string();
    }

    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", body.get(..end).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_authentication_rejected() {
        let error = CallerError::AuthenticationRejected(401);
        assert_eq!(format!("{}", error), "Authentication rejected: status 401");
    }

    #[test]
    fn test_display_rejected() {
        let error = CallerError::Rejected {
            status: 400,
            code: Some(21211),
            message: "Invalid 'To' Phone Number".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Call request rejected: status 400, code 21211: Invalid 'To' Phone Number"
        );
    }

    #[test]
    fn test_display_rejected_without_code() {
        let error = CallerError::Rejected {
            status: 404,
            code: None,
            message: "Not Found".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Call request rejected: status 404: Not Found"
        );
    }

    #[test]
    fn test_display_provider_unavailable() {
        let error = CallerError::ProviderUnavailable(503);
        assert_eq!(format!("{}", error), "Provider unavailable: status 503");
    }

    #[test]
    fn test_truncate_short_body_unchanged() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn test_truncate_long_body() {
        let body = "x".repeat(1000);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.len(), MAX_ERROR_BODY_LEN + "...[truncated]".len());
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // 'é' is two bytes; an odd prefix forces the cut off a boundary
        let body = format!("a{}", "é".repeat(300));
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() <= MAX_ERROR_BODY_LEN + "...[truncated]".len());
    }
}

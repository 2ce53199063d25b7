//! Caller binary tests.
//!
//! Runs the compiled `caller` executable with credentials withheld. These
//! paths exit before any request goes out, so no provider is needed.

// Test code is allowed to use expect/unwrap for assertions
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::process::{Command, Output};

const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";

/// Run the binary with `present` set and `missing` removed from its environment.
fn run_caller(present: (&str, &str), missing: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_caller"))
        .env(present.0, present.1)
        .env_remove(missing)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run caller binary")
}

#[test]
fn test_missing_account_sid_exits_nonzero_without_sid_line() {
    let output = run_caller((AUTH_TOKEN_VAR, "binary-token"), ACCOUNT_SID_VAR);

    assert!(!output.status.success(), "status: {:?}", output.status);
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(ACCOUNT_SID_VAR), "stderr: {stderr}");
}

#[test]
fn test_missing_auth_token_exits_nonzero_without_sid_line() {
    let output = run_caller((ACCOUNT_SID_VAR, "AC_binary"), AUTH_TOKEN_VAR);

    assert!(!output.status.success(), "status: {:?}", output.status);
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(AUTH_TOKEN_VAR), "stderr: {stderr}");
    assert!(!stderr.contains("binary-token"));
}

#[test]
fn test_empty_credential_counts_as_missing() {
    let output = Command::new(env!("CARGO_BIN_EXE_caller"))
        .env(ACCOUNT_SID_VAR, "")
        .env(AUTH_TOKEN_VAR, "binary-token")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run caller binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

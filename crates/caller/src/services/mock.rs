//! Mock call placer for testing.

use super::{CallPlacer, CallRecord, CallRequest};
use crate::errors::CallerError;
use common::types::CallSid;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Records every request and answers with a fixed SID or a fixed error.
pub struct MockCallPlacer {
    sid: Option<CallSid>,
    call_count: AtomicUsize,
    requests: Mutex<Vec<CallRequest>>,
}

impl MockCallPlacer {
    /// Create a mock that always succeeds with `sid`.
    pub fn returning(sid: &str) -> Self {
        Self {
            sid: Some(CallSid::new(sid)),
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that always fails as if the provider returned 503.
    pub fn failing() -> Self {
        Self {
            sid: None,
            call_count: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Get the number of calls made.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<CallRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl CallPlacer for MockCallPlacer {
    async fn create_call(&self, request: &CallRequest) -> Result<CallRecord, CallerError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.sid {
            Some(sid) => Ok(CallRecord {
                sid: sid.clone(),
                status: Some("queued".to_string()),
            }),
            None => Err(CallerError::ProviderUnavailable(503)),
        }
    }
}

//! Voice webhook handler.

use crate::routes::AppState;
use crate::twiml::VoiceResponse;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Content type the provider expects for call-control documents.
pub const TWIML_CONTENT_TYPE: &str = "text/xml";

/// Voice webhook handler.
///
/// The request body (call metadata from the provider) and headers are not
/// read. Every call, in every call state, is bridged to the configured dial
/// number.
///
/// ## Example Response
///
/// ```xml
/// <Response>
///   <Dial>+14379084824</Dial>
/// </Response>
/// ```
#[instrument(skip_all, name = "voice_webhook.dial")]
pub async fn voice_webhook(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let document = VoiceResponse::new()
        .dial(state.config.dial_number.clone())
        .render();

    debug!(
        target: "voice_webhook.handlers",
        dial_number = %state.config.dial_number,
        "Serving call-control document"
    );

    ([(header::CONTENT_TYPE, TWIML_CONTENT_TYPE)], document)
}

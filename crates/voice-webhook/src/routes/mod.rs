//! HTTP routes for the voice webhook.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::handlers;
use axum::{routing::post, Router};
use common::config::VOICE_WEBHOOK_PATH;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Config,
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `POST /voice-webhook` - Call-control document for the provider
/// - TraceLayer for request logging
/// - 30 second request timeout
///
/// Any other method on the webhook path gets Axum's default 405, any other
/// path 404.
pub fn build_routes(state: Arc<AppState>) -> Router {
    let webhook_routes = Router::new()
        .route(VOICE_WEBHOOK_PATH, post(handlers::voice_webhook))
        .with_state(state);

    // Layer order (bottom-to-top execution):
    // 1. TimeoutLayer - Timeout the request (innermost)
    // 2. TraceLayer - Log request details
    webhook_routes
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        build_routes(Arc::new(AppState {
            config: Config::default(),
        }))
    }

    async fn read_body(body: Body) -> String {
        let bytes = body.collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_app_state_is_clone() {
        // AppState must be Clone for Axum's State extractor.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_post_returns_dial_document() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/voice-webhook")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/xml"
        );
        assert_eq!(
            read_body(response.into_body()).await,
            "<Response>\n  <Dial>+14379084824</Dial>\n</Response>"
        );
    }

    #[tokio::test]
    async fn test_post_ignores_provider_form_body() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/voice-webhook")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .header("X-Twilio-Signature", "not-checked")
                    .body(Body::from(
                        "CallSid=CA123&CallStatus=completed&Digits=9&From=%2B15550001111",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_body(response.into_body()).await,
            "<Response>\n  <Dial>+14379084824</Dial>\n</Response>"
        );
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/voice-webhook")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(!read_body(response.into_body()).await.contains("<Dial>"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/voice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

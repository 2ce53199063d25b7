//! Test server harness for end-to-end webhook tests.

use common::config::VOICE_WEBHOOK_PATH;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use voice_webhook::config::Config;
use voice_webhook::routes::{self, AppState};

/// Spawns the real voice-webhook router on `127.0.0.1:0`.
///
/// The server task is aborted when the harness is dropped.
pub struct TestWebhookServer {
    addr: SocketAddr,
    config: Config,
    _handle: JoinHandle<()>,
}

impl TestWebhookServer {
    /// Spawn a server with the default configuration.
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        Self::spawn_with_config(Config::default()).await
    }

    /// Spawn a server with a custom configuration.
    ///
    /// `config.bind_address` is ignored; the server always binds a random
    /// loopback port.
    pub async fn spawn_with_config(config: Config) -> Result<Self, anyhow::Error> {
        let state = Arc::new(AppState {
            config: config.clone(),
        });

        // Build routes using voice-webhook's real route builder
        let app = routes::build_routes(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            config,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Full URL of the webhook route.
    pub fn webhook_url(&self) -> String {
        format!("{}{}", self.url(), VOICE_WEBHOOK_PATH)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for TestWebhookServer {
    fn drop(&mut self) {
        self._handle.abort();
    }
}

//! Caller
//!
//! Places one outbound call through the provider and prints its SID.

use caller::config::Config;
use caller::place_call;
use caller::services::TwilioClient;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (stderr, so stdout carries only the SID line)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caller=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Credentials are required before any request goes out
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(
        to = %config.to_number,
        from = %config.from_number,
        callback_url = %config.callback_url,
        "Configuration loaded successfully"
    );

    let client = TwilioClient::new(&config.api_base_url, config.credentials.clone())?;

    let sid = place_call(&client, &config).await.map_err(|e| {
        error!("Failed to place call: {}", e);
        e
    })?;

    println!("Call SID: {sid}");

    Ok(())
}

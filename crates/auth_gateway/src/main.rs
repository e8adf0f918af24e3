// Auth Gateway Server
//
// Standalone Google sign-in service: issues consent-screen URLs and
// exchanges authorization codes for tokens and the account email.

use std::env;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use auth_gateway::config::{GoogleCredentials, Settings};
use auth_gateway::server::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();
    let host = args.get(1).map(|s| s.as_str()).unwrap_or("127.0.0.1");
    let port = args
        .get(2)
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080);

    // Load configuration and credentials once; both stay immutable for the
    // process lifetime.
    let settings = Settings::from_env().context("Failed to load configuration")?;
    let credentials = GoogleCredentials::load(&settings.credentials_path)
        .context("Failed to load Google credentials")?;

    tracing::info!("[OK] Google OAuth configured: {}", credentials.client_id);
    tracing::info!("[OK] Requested scopes: {}", settings.scopes.join(", "));
    tracing::info!(
        "[INFO] API documentation is running on http://{}:{}/documentation",
        host,
        port
    );

    start_server(host, port, &settings, credentials).await
}

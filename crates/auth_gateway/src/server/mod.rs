//! Auth Gateway HTTP Server
//!
//! Routes HTTP requests to the sign-in handlers and serves the API
//! documentation.

pub mod docs;
pub mod handlers;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::auth::{AuthUrlBuilder, CodeExchanger, GoogleProvider, ProviderClient};
use crate::config::{GoogleCredentials, Settings};
use crate::error::ConfigError;

/// Application state shared across handlers.
///
/// Credentials are loaded once at startup and never mutated afterwards, so
/// everything here is read-only and safely shared.
#[derive(Clone)]
pub struct AppState {
    pub url_builder: AuthUrlBuilder,
    pub exchanger: CodeExchanger,
    pub scopes: Vec<String>,
}

impl AppState {
    pub fn new(credentials: GoogleCredentials, scopes: Vec<String>) -> Self {
        let url_builder = AuthUrlBuilder::new(credentials.clone());
        let provider: Arc<dyn ProviderClient> = Arc::new(GoogleProvider::new(credentials));
        Self::with_provider(url_builder, provider, scopes)
    }

    /// Assemble state around an explicit provider (tests use a double or a
    /// provider pointed at a stub server).
    pub fn with_provider(
        url_builder: AuthUrlBuilder,
        provider: Arc<dyn ProviderClient>,
        scopes: Vec<String>,
    ) -> Self {
        Self {
            url_builder,
            exchanger: CodeExchanger::new(provider),
            scopes,
        }
    }
}

/// Build the router with sign-in and documentation endpoints.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/auth/google/url", get(handlers::auth_url))
        .route("/auth/google/exchange", post(handlers::exchange_code))
        .route("/documentation", get(docs::documentation_page))
        .route("/documentation/openapi.json", get(docs::openapi_json))
        .with_state(state)
}

fn cors_layer(origin: &str) -> Result<CorsLayer, ConfigError> {
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Start the Auth Gateway HTTP server.
///
/// # Errors
/// Returns an error if the CORS origin is unusable or binding fails.
pub async fn start_server(
    host: &str,
    port: u16,
    settings: &Settings,
    credentials: GoogleCredentials,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(credentials, settings.scopes.clone()));

    let app = router(state)
        .layer(cors_layer(&settings.cors_allowed_origin)?)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;

    info!("[INFO] Auth gateway listening on {}", addr);
    info!("[INFO] Available endpoints:");
    info!("  GET    /auth/google/url         - Authorization URL for the consent screen");
    info!("  POST   /auth/google/exchange    - Exchange authorization code for tokens");
    info!("  GET    /documentation           - API documentation");

    axum::serve(listener, app).await?;

    Ok(())
}

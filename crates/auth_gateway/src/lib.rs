//! Google OAuth Sign-In Gateway
//!
//! Wraps Google's OAuth2 authorization-code flow behind two operations:
//! building the consent-screen URL and exchanging a one-time authorization
//! code for tokens plus the authenticated account's email.
//!
//! # Features
//! - Deterministic authorization-URL construction (offline access, forced consent)
//! - Two-step code exchange: token endpoint, then userinfo lookup
//! - Narrow provider seam so tests can substitute a double
//! - HTTP server with REST endpoints and an OpenAPI documentation page
//!
//! Token persistence and session management are left to callers.

pub mod auth;
pub mod config;
pub mod error;
pub mod server;

pub use auth::{AuthUrlBuilder, CodeExchanger, GoogleProvider, ProviderClient, TokenResult, TokenSet, UserInfo};
pub use config::{GoogleCredentials, Settings};
pub use error::{AuthExchangeError, ConfigError, ProviderError};
pub use server::{start_server, AppState};

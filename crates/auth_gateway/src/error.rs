use std::path::PathBuf;

use thiserror::Error;

/// Failures detected while loading configuration or credentials.
///
/// These surface at startup (or on first use of the URL builder) and abort
/// the process; nothing in this taxonomy is retried.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("failed to read credentials file {}", path.display())]
    CredentialsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credentials file {} is malformed", path.display())]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("credentials file {} lists no redirect URIs", path.display())]
    MissingRedirectUri { path: PathBuf },

    #[error("credentials field {0} is empty")]
    EmptyCredentialsField(&'static str),

    #[error("scope list is empty")]
    EmptyScopes,

    #[error("invalid endpoint URL {url}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid CORS origin {0}")]
    InvalidCorsOrigin(String),
}

/// Failures raised by the provider during the exchange sequence.
///
/// Carries the provider's status and body verbatim so logs keep the full
/// detail even though callers only ever see the generic message.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("token endpoint rejected the exchange: {status}: {body}")]
    TokenEndpoint { status: u16, body: String },

    #[error("userinfo endpoint rejected the lookup: {status}: {body}")]
    UserinfoEndpoint { status: u16, body: String },

    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Error surfaced to callers of the exchange operation.
///
/// Any provider-side failure collapses into one generic message; the
/// underlying [`ProviderError`] stays attached as the source so logs can
/// still tell a bad code from a network fault or a rejected userinfo call.
#[derive(Error, Debug)]
pub enum AuthExchangeError {
    #[error("failed to exchange authorization code for tokens")]
    Provider(#[from] ProviderError),

    #[error("authorization code must not be empty")]
    EmptyCode,
}

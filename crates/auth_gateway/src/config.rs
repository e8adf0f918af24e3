//! Process configuration and Google client credentials.
//!
//! Everything here is loaded once by the entry point and injected as
//! immutable values; no module reads the environment on its own.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Path of the Google client-credentials JSON file, relative to the
/// process working directory.
pub const CREDENTIALS_PATH_VAR: &str = "GOOGLE_CREDENTIALS_PATH";

/// Comma-separated list of OAuth scopes to request on the consent screen.
pub const SCOPES_VAR: &str = "GOOGLE_SCOPES_API";

/// Origin allowed to call the gateway from a browser.
pub const CORS_ORIGIN_VAR: &str = "CORS_ALLOWED_ORIGIN";

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Environment-driven settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials_path: PathBuf,
    pub scopes: Vec<String>,
    pub cors_allowed_origin: String,
}

impl Settings {
    /// Read settings from the environment. Fails fast on anything missing
    /// or unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials_path = env::var(CREDENTIALS_PATH_VAR)
            .map_err(|_| ConfigError::MissingVar(CREDENTIALS_PATH_VAR))?;
        let scopes_raw =
            env::var(SCOPES_VAR).map_err(|_| ConfigError::MissingVar(SCOPES_VAR))?;
        let cors_allowed_origin =
            env::var(CORS_ORIGIN_VAR).unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());

        Self::from_parts(&credentials_path, &scopes_raw, cors_allowed_origin)
    }

    /// Build settings from already-resolved values.
    pub fn from_parts(
        credentials_path: &str,
        scopes_raw: &str,
        cors_allowed_origin: String,
    ) -> Result<Self, ConfigError> {
        let scopes = parse_scopes(scopes_raw);
        if scopes.is_empty() {
            return Err(ConfigError::EmptyScopes);
        }

        Ok(Self {
            credentials_path: PathBuf::from(credentials_path),
            scopes,
            cors_allowed_origin,
        })
    }
}

fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|scope| !scope.is_empty())
        .map(str::to_string)
        .collect()
}

/// Shape of the credentials file downloaded from the Google Cloud console.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    web: WebCredentials,
}

#[derive(Debug, Deserialize)]
struct WebCredentials {
    client_id: String,
    client_secret: String,
    #[serde(default)]
    redirect_uris: Vec<String>,
}

/// Google OAuth client credentials. Loaded once, never mutated.
#[derive(Debug, Clone)]
pub struct GoogleCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GoogleCredentials {
    /// Load and validate credentials from the console-exported JSON file.
    /// The first entry of `redirect_uris` is used.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::CredentialsRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file: CredentialsFile =
            serde_json::from_str(&content).map_err(|source| ConfigError::CredentialsParse {
                path: path.to_path_buf(),
                source,
            })?;

        let redirect_uri = file
            .web
            .redirect_uris
            .into_iter()
            .next()
            .ok_or_else(|| ConfigError::MissingRedirectUri {
                path: path.to_path_buf(),
            })?;

        let credentials = Self {
            client_id: file.web.client_id,
            client_secret: file.web.client_secret,
            redirect_uri,
        };
        credentials.validate()?;

        Ok(credentials)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("redirect_uri", &self.redirect_uri),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyCredentialsField(field));
            }
        }
        Ok(())
    }
}

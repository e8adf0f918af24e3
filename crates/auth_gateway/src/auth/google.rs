//! Google OAuth2 adapter.
//!
//! Builds the consent-screen URL and implements [`ProviderClient`] over
//! Google's token and userinfo endpoints.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::auth::provider::{ProviderClient, TokenSet, UserInfo};
use crate::config::GoogleCredentials;
use crate::error::{ConfigError, ProviderError};

pub const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Builds the authorization URL for the consent dialog.
///
/// Pure construction: no network calls, no nonce or state, so the same
/// credentials and scopes always produce the same URL.
#[derive(Debug, Clone)]
pub struct AuthUrlBuilder {
    credentials: GoogleCredentials,
    auth_endpoint: String,
}

impl AuthUrlBuilder {
    pub fn new(credentials: GoogleCredentials) -> Self {
        Self {
            credentials,
            auth_endpoint: GOOGLE_AUTH_ENDPOINT.to_string(),
        }
    }

    /// Build the consent-screen URL for the requested scopes.
    ///
    /// Requests offline access and forces the consent prompt so Google
    /// re-issues a refresh token on every authorization.
    pub fn build(&self, scopes: &[String]) -> Result<String, ConfigError> {
        if scopes.is_empty() {
            return Err(ConfigError::EmptyScopes);
        }

        let mut url =
            Url::parse(&self.auth_endpoint).map_err(|source| ConfigError::InvalidEndpoint {
                url: self.auth_endpoint.clone(),
                source,
            })?;

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("redirect_uri", &self.credentials.redirect_uri)
            .append_pair("scope", &scopes.join(" "))
            .append_pair("access_type", "offline")
            .append_pair("prompt", "consent")
            .append_pair("include_granted_scopes", "true");

        Ok(url.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
    access_token: String,
    // Google omits this on repeat consent unless prompt=consent forces it
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserinfoResponse {
    email: String,
}

/// [`ProviderClient`] implementation backed by Google's endpoints.
pub struct GoogleProvider {
    credentials: GoogleCredentials,
    token_endpoint: String,
    userinfo_endpoint: String,
    http_client: reqwest::Client,
}

impl GoogleProvider {
    pub fn new(credentials: GoogleCredentials) -> Self {
        Self::with_endpoints(credentials, GOOGLE_TOKEN_ENDPOINT, GOOGLE_USERINFO_ENDPOINT)
    }

    /// Point the adapter at alternative endpoints (test servers).
    pub fn with_endpoints(
        credentials: GoogleCredentials,
        token_endpoint: impl Into<String>,
        userinfo_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            token_endpoint: token_endpoint.into(),
            userinfo_endpoint: userinfo_endpoint.into(),
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ProviderClient for GoogleProvider {
    async fn exchange_code(&self, code: &str) -> Result<TokenSet, ProviderError> {
        let form_params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_endpoint)
            .form(&form_params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::TokenEndpoint { status, body });
        }

        let token_response: TokenEndpointResponse = response.json().await?;

        Ok(TokenSet {
            access_token: token_response.access_token,
            refresh_token: token_response.refresh_token,
        })
    }

    async fn userinfo(&self, access_token: &str) -> Result<UserInfo, ProviderError> {
        let response = self
            .http_client
            .get(&self.userinfo_endpoint)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::UserinfoEndpoint { status, body });
        }

        let info: UserinfoResponse = response.json().await?;

        Ok(UserInfo { email: info.email })
    }
}

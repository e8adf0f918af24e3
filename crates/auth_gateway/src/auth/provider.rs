//! Narrow seam over the OAuth provider.
//!
//! The exchange sequence needs exactly two calls, so the trait exposes
//! exactly two; tests substitute a double instead of a live provider.

use async_trait::async_trait;

use crate::error::ProviderError;

/// Tokens issued by the provider's token endpoint.
#[derive(Debug, Clone)]
pub struct TokenSet {
    pub access_token: String,
    /// Absent when the provider declines to re-issue one (e.g. repeat
    /// consent without a forced prompt).
    pub refresh_token: Option<String>,
}

/// Profile attributes resolved from the userinfo endpoint.
#[derive(Debug, Clone)]
pub struct UserInfo {
    pub email: String,
}

/// Provider operations used by the code exchange.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Exchange a one-time authorization code for a token set.
    async fn exchange_code(&self, code: &str) -> Result<TokenSet, ProviderError>;

    /// Resolve the authenticated account's profile with an access token.
    async fn userinfo(&self, access_token: &str) -> Result<UserInfo, ProviderError>;
}

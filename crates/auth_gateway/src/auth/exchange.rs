//! Authorization-code exchange sequence.
//!
//! A single forward-only flow: token exchange, then userinfo lookup.
//! Not resumable and never retried here; callers wrap their own timeout
//! around it if they need one.

use std::sync::Arc;

use serde::Serialize;

use crate::auth::provider::ProviderClient;
use crate::error::AuthExchangeError;

/// Outcome of a successful exchange. Ownership passes to the caller, who
/// decides whether and where to persist anything.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResult {
    pub email: String,
    pub access_token: String,
    /// Empty when the provider did not issue a refresh token.
    pub refresh_token: String,
}

/// Exchanges one-time authorization codes for tokens and the account email.
#[derive(Clone)]
pub struct CodeExchanger {
    provider: Arc<dyn ProviderClient>,
}

impl CodeExchanger {
    pub fn new(provider: Arc<dyn ProviderClient>) -> Self {
        Self { provider }
    }

    /// Run the two-step exchange.
    ///
    /// The code is only checked for non-emptiness; the provider rejects
    /// invalid or expired codes itself. Provider failures are logged with
    /// full detail and surfaced under one generic message, with the
    /// original error kept as the source.
    pub async fn exchange(&self, code: &str) -> Result<TokenResult, AuthExchangeError> {
        if code.trim().is_empty() {
            return Err(AuthExchangeError::EmptyCode);
        }

        let tokens = self.provider.exchange_code(code).await.map_err(|err| {
            tracing::error!("[ERROR] Token exchange failed: {}", err);
            AuthExchangeError::from(err)
        })?;

        let user = self
            .provider
            .userinfo(&tokens.access_token)
            .await
            .map_err(|err| {
                tracing::error!("[ERROR] Userinfo lookup failed: {}", err);
                AuthExchangeError::from(err)
            })?;

        Ok(TokenResult {
            email: user.email,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::auth::provider::{TokenSet, UserInfo};
    use crate::error::ProviderError;

    struct StubProvider {
        refresh_token: Option<String>,
        fail_exchange: bool,
        fail_userinfo: bool,
    }

    impl StubProvider {
        fn ok() -> Self {
            Self {
                refresh_token: Some("R".to_string()),
                fail_exchange: false,
                fail_userinfo: false,
            }
        }
    }

    #[async_trait]
    impl ProviderClient for StubProvider {
        async fn exchange_code(&self, _code: &str) -> Result<TokenSet, ProviderError> {
            if self.fail_exchange {
                return Err(ProviderError::TokenEndpoint {
                    status: 400,
                    body: "invalid_grant".to_string(),
                });
            }
            Ok(TokenSet {
                access_token: "A".to_string(),
                refresh_token: self.refresh_token.clone(),
            })
        }

        async fn userinfo(&self, access_token: &str) -> Result<UserInfo, ProviderError> {
            assert_eq!(access_token, "A");
            if self.fail_userinfo {
                return Err(ProviderError::UserinfoEndpoint {
                    status: 401,
                    body: "Invalid Credentials".to_string(),
                });
            }
            Ok(UserInfo {
                email: "u@x.com".to_string(),
            })
        }
    }

    fn exchanger(stub: StubProvider) -> CodeExchanger {
        CodeExchanger::new(Arc::new(stub))
    }

    #[tokio::test]
    async fn exchanges_code_for_tokens_and_email() {
        let result = exchanger(StubProvider::ok())
            .exchange("valid-code")
            .await
            .unwrap();

        assert_eq!(result.email, "u@x.com");
        assert_eq!(result.access_token, "A");
        assert_eq!(result.refresh_token, "R");
    }

    #[tokio::test]
    async fn missing_refresh_token_becomes_empty_string() {
        let stub = StubProvider {
            refresh_token: None,
            ..StubProvider::ok()
        };

        let result = exchanger(stub).exchange("valid-code").await.unwrap();

        assert_eq!(result.refresh_token, "");
    }

    #[tokio::test]
    async fn rejected_code_surfaces_the_generic_message() {
        let stub = StubProvider {
            fail_exchange: true,
            ..StubProvider::ok()
        };

        let err = exchanger(stub).exchange("expired-code").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to exchange authorization code for tokens"
        );
    }

    #[tokio::test]
    async fn userinfo_failure_keeps_the_cause_behind_the_generic_message() {
        let stub = StubProvider {
            fail_userinfo: true,
            ..StubProvider::ok()
        };

        let err = exchanger(stub).exchange("valid-code").await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "failed to exchange authorization code for tokens"
        );
        let source = std::error::Error::source(&err).expect("cause should be preserved");
        assert!(source.to_string().contains("userinfo endpoint"));
    }

    #[tokio::test]
    async fn empty_code_is_rejected_locally() {
        let err = exchanger(StubProvider::ok()).exchange("  ").await.unwrap_err();
        assert!(matches!(err, AuthExchangeError::EmptyCode));
    }

    #[test]
    fn token_result_uses_camel_case_wire_fields() {
        let value = serde_json::to_value(TokenResult {
            email: "u@x.com".to_string(),
            access_token: "A".to_string(),
            refresh_token: "R".to_string(),
        })
        .unwrap();

        assert_eq!(value["email"], "u@x.com");
        assert_eq!(value["accessToken"], "A");
        assert_eq!(value["refreshToken"], "R");
    }
}

//! Sign-in endpoint handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::TokenResult;
use crate::error::AuthExchangeError;

use super::AppState;

/// Response with the consent-screen URL.
#[derive(Debug, Serialize)]
pub struct AuthUrlResponse {
    /// Authorization URL for the user to visit
    pub url: String,
}

/// Request to exchange an authorization code for tokens.
#[derive(Debug, Deserialize)]
pub struct ExchangeRequest {
    /// Authorization code from the provider's redirect
    pub code: String,
}

/// Get the authorization URL for the configured scopes.
pub async fn auth_url(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AuthUrlResponse>, (StatusCode, String)> {
    let url = state.url_builder.build(&state.scopes).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to build authorization URL: {}", e),
        )
    })?;

    Ok(Json(AuthUrlResponse { url }))
}

/// Exchange an authorization code for tokens and the account email.
pub async fn exchange_code(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExchangeRequest>,
) -> Result<Json<TokenResult>, (StatusCode, String)> {
    match state.exchanger.exchange(&req.code).await {
        Ok(result) => Ok(Json(result)),
        Err(err @ AuthExchangeError::EmptyCode) => {
            Err((StatusCode::BAD_REQUEST, err.to_string()))
        }
        // One message for every provider-side failure; detail stays in the logs.
        Err(err) => Err((StatusCode::UNAUTHORIZED, err.to_string())),
    }
}

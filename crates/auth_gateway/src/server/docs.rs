//! API documentation endpoints.
//!
//! Serves the OpenAPI document describing the gateway's two operations and
//! a small viewer page that renders it.

use axum::{response::Html, Json};
use serde_json::{json, Value};

pub(crate) fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Auth Gateway",
            "description": "Google sign-in gateway: issues OAuth consent URLs and exchanges authorization codes for tokens and the account email.",
            "version": "1.0"
        },
        "paths": {
            "/auth/google/url": {
                "get": {
                    "summary": "Authorization URL for the Google consent screen",
                    "responses": {
                        "200": {
                            "description": "Consent-screen URL for the configured scopes",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "required": ["url"],
                                        "properties": {
                                            "url": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/auth/google/exchange": {
                "post": {
                    "summary": "Exchange an authorization code for tokens",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "required": ["code"],
                                    "properties": {
                                        "code": { "type": "string" }
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Tokens and the authenticated account's email",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "required": ["email", "accessToken", "refreshToken"],
                                        "properties": {
                                            "email": { "type": "string" },
                                            "accessToken": { "type": "string" },
                                            "refreshToken": {
                                                "type": "string",
                                                "description": "Empty when the provider did not issue one"
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        "400": { "description": "Empty authorization code" },
                        "401": { "description": "Exchange rejected by the provider" }
                    }
                }
            }
        }
    })
}

/// OpenAPI document as JSON.
pub async fn openapi_json() -> Json<Value> {
    Json(openapi_document())
}

/// Documentation viewer page.
pub async fn documentation_page() -> Html<&'static str> {
    Html(DOCUMENTATION_PAGE)
}

const DOCUMENTATION_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Auth Gateway API</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        SwaggerUIBundle({
            url: '/documentation/openapi.json',
            dom_id: '#swagger-ui'
        });
    </script>
</body>
</html>
"#;

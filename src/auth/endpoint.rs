// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OAuth2 token endpoint.

use std::future::Future;

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::error::EndpointError;

use super::{Credentials, Token};

/// A provider of OAuth2 tokens.
///
/// Implementations perform exactly one exchange per call and never retry;
/// fallback policy belongs to the [`TokenManager`](super::TokenManager).
pub trait TokenEndpoint: Send + Sync {
    /// Exchanges client credentials for a new token.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError` if the exchange fails.
    fn fetch(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Token, EndpointError>> + Send;

    /// Exchanges the refresh token of `token` for a new token.
    ///
    /// # Errors
    ///
    /// Returns `EndpointError::NoRefreshToken` if `token` cannot be
    /// refreshed, or another `EndpointError` if the exchange fails.
    fn refresh(
        &self,
        credentials: &Credentials,
        token: &Token,
    ) -> impl Future<Output = Result<Token, EndpointError>> + Send;
}

/// OAuth2 error body, RFC 6749 section 5.2.
#[derive(Debug, Deserialize)]
struct ProviderError {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// [`TokenEndpoint`] speaking OAuth2 over HTTPS.
///
/// Clients authenticate with HTTP Basic auth; grant parameters are sent
/// form-encoded.
///
/// # Examples
///
/// ```no_run
/// use lumic_lib::auth::{Credentials, OAuth2Client, TokenEndpoint};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let endpoint = OAuth2Client::new(
///     reqwest::Client::new(),
///     lumic_lib::Config::DEFAULT_TOKEN_ENDPOINT,
/// );
/// let token = endpoint.fetch(&Credentials::new("id", "secret")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct OAuth2Client {
    client: Client,
    token_url: String,
    scopes: Vec<String>,
}

impl OAuth2Client {
    /// Creates an endpoint client for `token_url`.
    #[must_use]
    pub fn new(client: Client, token_url: impl Into<String>) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            scopes: Vec::new(),
        }
    }

    /// Sets the scopes requested with the client-credentials grant.
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Returns the token URL.
    #[must_use]
    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    async fn exchange(
        &self,
        credentials: &Credentials,
        form: &[(&str, &str)],
    ) -> Result<Token, EndpointError> {
        tracing::debug!(url = %self.token_url, grant = form[0].1, "Requesting token");

        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .form(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let (error, description) = match serde_json::from_slice::<ProviderError>(&body) {
                Ok(e) => (e.error, e.error_description),
                Err(_) => (
                    status.canonical_reason().unwrap_or("unknown").to_string(),
                    None,
                ),
            };
            return Err(EndpointError::Rejected {
                status: status.as_u16(),
                error,
                description,
            });
        }

        let mut token: Token = serde_json::from_slice(&body)
            .map_err(|e| EndpointError::InvalidResponse(e.to_string()))?;
        if token.access_token.is_empty() {
            return Err(EndpointError::InvalidResponse(
                "empty access_token".to_string(),
            ));
        }
        token.obtained_at = Some(Utc::now());

        tracing::debug!(expires_in = token.expires_in, "Received token");
        Ok(token)
    }
}

impl TokenEndpoint for OAuth2Client {
    async fn fetch(&self, credentials: &Credentials) -> Result<Token, EndpointError> {
        let scope = self.scopes.join(" ");
        let mut form = vec![("grant_type", "client_credentials")];
        if !scope.is_empty() {
            form.push(("scope", scope.as_str()));
        }
        self.exchange(credentials, &form).await
    }

    async fn refresh(
        &self,
        credentials: &Credentials,
        token: &Token,
    ) -> Result<Token, EndpointError> {
        let refresh_token = token
            .refresh_token
            .as_deref()
            .ok_or(EndpointError::NoRefreshToken)?;

        let mut refreshed = self
            .exchange(
                credentials,
                &[
                    ("grant_type", "refresh_token"),
                    ("refresh_token", refresh_token),
                ],
            )
            .await?;

        // Providers that do not rotate refresh tokens omit it from the response.
        if refreshed.refresh_token.is_none() {
            refreshed.refresh_token = Some(refresh_token.to_string());
        }
        Ok(refreshed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refresh_without_refresh_token_fails_locally() {
        // Unroutable URL: the call must fail before any I/O.
        let endpoint = OAuth2Client::new(Client::new(), "http://127.0.0.1:1/token");
        let result = endpoint
            .refresh(&Credentials::new("id", "secret"), &Token::bearer("at", 60))
            .await;
        assert!(matches!(result, Err(EndpointError::NoRefreshToken)));
    }

    #[test]
    fn provider_error_body() {
        let err: ProviderError = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"Token is not active"}"#,
        )
        .unwrap();
        assert_eq!(err.error, "invalid_grant");
        assert_eq!(err.error_description.as_deref(), Some("Token is not active"));
    }
}

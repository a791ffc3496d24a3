// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration supplied by the host.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Deserializer};

use crate::auth::{Credentials, TokenStore};
use crate::error::ConfigError;

/// Configuration of a Lumic home.
///
/// Hosts usually deserialize this from their own configuration entry, which
/// carries `home_id`, `client_id` and `client_secret`. Everything else has a
/// default.
///
/// # Examples
///
/// ```
/// use lumic_lib::Config;
/// use std::time::Duration;
///
/// let config = Config::new(4711)
///     .with_credentials("client", "secret")
///     .with_token_dir("/var/lib/host")
///     .with_timeout(Duration::from_secs(5));
///
/// assert!(config.validate().is_ok());
/// assert!(config.credentials().is_some());
///
/// let config: Config = serde_json::from_str(
///     r#"{ "home_id": 4711, "client_id": "client", "client_secret": "secret" }"#,
/// ).unwrap();
/// assert_eq!(config.home_id(), 4711);
/// ```
#[derive(Clone, Deserialize)]
pub struct Config {
    home_id: i64,
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    token_path: Option<PathBuf>,
    #[serde(default = "default_api_endpoint")]
    api_endpoint: String,
    #[serde(default = "default_token_endpoint")]
    token_endpoint: String,
    #[serde(rename = "timeout_secs", default = "default_timeout", deserialize_with = "secs")]
    timeout: Duration,
    #[serde(rename = "refresh_margin_secs", default, deserialize_with = "optional_secs")]
    refresh_margin: Option<Duration>,
    #[serde(default)]
    scopes: Vec<String>,
}

fn default_api_endpoint() -> String {
    Config::DEFAULT_API_ENDPOINT.to_string()
}

fn default_token_endpoint() -> String {
    Config::DEFAULT_TOKEN_ENDPOINT.to_string()
}

fn default_timeout() -> Duration {
    Config::DEFAULT_TIMEOUT
}

fn secs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
}

fn optional_secs<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Duration>, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
}

impl Config {
    /// GraphQL endpoint of the Lumic cloud.
    pub const DEFAULT_API_ENDPOINT: &'static str = "https://lumic-v1.apis.cedgetec.com/gql/graphql";
    /// OAuth2 token endpoint of the Lumic identity provider.
    pub const DEFAULT_TOKEN_ENDPOINT: &'static str =
        "https://auth.cedgetec.com/auth/realms/cedgetec-id/protocol/openid-connect/token";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the given home, without credentials.
    #[must_use]
    pub fn new(home_id: i64) -> Self {
        Self {
            home_id,
            client_id: None,
            client_secret: None,
            token_path: None,
            api_endpoint: default_api_endpoint(),
            token_endpoint: default_token_endpoint(),
            timeout: default_timeout(),
            refresh_margin: None,
            scopes: Vec::new(),
        }
    }

    /// Sets the OAuth2 client credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Sets the exact path of the token cache file.
    #[must_use]
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    /// Places the token cache file, under its default name, in `dir`.
    #[must_use]
    pub fn with_token_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.token_path = Some(dir.as_ref().join(TokenStore::DEFAULT_FILE_NAME));
        self
    }

    /// Overrides the GraphQL endpoint.
    #[must_use]
    pub fn with_api_endpoint(mut self, url: impl Into<String>) -> Self {
        self.api_endpoint = url.into();
        self
    }

    /// Overrides the OAuth2 token endpoint.
    #[must_use]
    pub fn with_token_endpoint(mut self, url: impl Into<String>) -> Self {
        self.token_endpoint = url.into();
        self
    }

    /// Sets the timeout of every HTTP request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reuses a cached token while it stays valid for longer than `margin`.
    ///
    /// Without a margin every acquisition exchanges a new token.
    #[must_use]
    pub fn with_refresh_margin(mut self, margin: Duration) -> Self {
        self.refresh_margin = Some(margin);
        self
    }

    /// Sets the scopes requested with the client-credentials grant.
    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the home id.
    #[must_use]
    pub fn home_id(&self) -> i64 {
        self.home_id
    }

    /// Returns the credentials, if both client id and secret are set and
    /// non-empty.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Some(Credentials::new(id.clone(), secret.clone()))
            }
            _ => None,
        }
    }

    /// Returns the token cache, if a path is configured.
    #[must_use]
    pub fn token_store(&self) -> Option<TokenStore> {
        self.token_path.as_ref().map(TokenStore::new)
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Returns the OAuth2 token endpoint.
    #[must_use]
    pub fn token_endpoint(&self) -> &str {
        &self.token_endpoint
    }

    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the token reuse margin.
    #[must_use]
    pub fn refresh_margin(&self) -> Option<Duration> {
        self.refresh_margin
    }

    /// Returns the requested scopes.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Checks the configuration for values that cannot work.
    ///
    /// Missing credentials are valid: the resulting client reports
    /// [`Error::NotAuthenticated`](crate::Error::NotAuthenticated) on use.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if only half of the credentials are given, a
    /// credential is empty, an endpoint is not an http(s) URL, or the timeout
    /// is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => {
                if id.is_empty() {
                    return Err(ConfigError::EmptyValue("client_id"));
                }
                if secret.is_empty() {
                    return Err(ConfigError::EmptyValue("client_secret"));
                }
            }
            (None, None) => {}
            _ => return Err(ConfigError::IncompleteCredentials),
        }

        for endpoint in [&self.api_endpoint, &self.token_endpoint] {
            if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                return Err(ConfigError::InvalidEndpoint(endpoint.clone()));
            }
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("home_id", &self.home_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("token_path", &self.token_path)
            .field("api_endpoint", &self.api_endpoint)
            .field("token_endpoint", &self.token_endpoint)
            .field("timeout", &self.timeout)
            .field("refresh_margin", &self.refresh_margin)
            .field("scopes", &self.scopes)
            .finish()
    }
}

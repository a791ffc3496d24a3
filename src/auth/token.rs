// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OAuth2 token and client credentials.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An OAuth2 token as returned by the token endpoint.
///
/// Provider-defined fields the library does not interpret (e.g.
/// `refresh_expires_in`, `session_state`, `scope`) are kept in
/// [`extra`](Self::extra) so the cached file holds the full response.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Bearer credential for API requests.
    pub access_token: String,
    /// Credential for the refresh grant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds, 0 when unknown.
    #[serde(default)]
    pub expires_in: u64,
    /// Token type, normally `Bearer`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// When the token was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obtained_at: Option<DateTime<Utc>>,
    /// Remaining provider fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl Token {
    /// Creates a bearer token without refresh token or extra fields.
    #[must_use]
    pub fn bearer(access_token: impl Into<String>, expires_in: u64) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_in,
            token_type: default_token_type(),
            obtained_at: None,
            extra: Map::new(),
        }
    }

    /// Sets the refresh token.
    #[must_use]
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Returns when the access token expires, if lifetime and receipt time
    /// are known.
    ///
    /// A lifetime reaching past the representable range saturates to
    /// [`DateTime::<Utc>::MAX_UTC`].
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.expires_in == 0 {
            return None;
        }
        let obtained_at = self.obtained_at?;
        let expires_at = i64::try_from(self.expires_in)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .and_then(|lifetime| obtained_at.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Some(expires_at)
    }

    /// Returns `true` if the token is still valid for at least `margin`
    /// after `now`.
    ///
    /// Tokens with unknown expiry are never considered valid, nor is any
    /// token when `now + margin` is out of range.
    #[must_use]
    pub fn is_valid_for(&self, margin: Duration, now: DateTime<Utc>) -> bool {
        let Some(expires_at) = self.expires_at() else {
            return false;
        };
        chrono::Duration::from_std(margin)
            .ok()
            .and_then(|margin| now.checked_add_signed(margin))
            .is_some_and(|deadline| deadline < expires_at)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .field("obtained_at", &self.obtained_at)
            .finish_non_exhaustive()
    }
}

/// OAuth2 client credentials. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Creates client credentials.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Returns the client id.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

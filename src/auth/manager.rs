// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Token lifecycle: cache, refresh, fallback and persistence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::{AuthError, EndpointError, Error};

use super::{Credentials, OAuth2Client, Token, TokenEndpoint, TokenStore};

/// Serves valid bearer tokens, performing at most one exchange at a time.
///
/// Every acquisition runs under one lock, held across the whole
/// load → fetch/refresh → persist sequence. Callers that queue up behind an
/// acquisition in progress receive the token it produced instead of starting
/// another exchange.
///
/// # Acquisition
///
/// 1. Without a token in memory, the persisted file is loaded. A missing or
///    unreadable file means "no token".
/// 2. With a [refresh margin](Self::with_refresh_margin), a token that stays
///    valid long enough is returned as is.
/// 3. Without a token, one is fetched with the client-credentials grant.
///    Otherwise it is refreshed; if the refresh fails for any reason, one
///    fresh fetch is made instead.
/// 4. The new token is persisted (best effort) and returned.
///
/// # Examples
///
/// ```no_run
/// use lumic_lib::auth::{Credentials, OAuth2Client, TokenManager, TokenStore};
///
/// # async fn example() -> lumic_lib::Result<()> {
/// let endpoint = OAuth2Client::new(
///     reqwest::Client::new(),
///     lumic_lib::Config::DEFAULT_TOKEN_ENDPOINT,
/// );
/// let manager = TokenManager::new(endpoint, Credentials::new("id", "secret"))
///     .with_store(TokenStore::in_dir("/var/lib/host"));
///
/// let token = manager.get_token().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TokenManager<E = OAuth2Client> {
    endpoint: E,
    credentials: Credentials,
    store: Option<TokenStore>,
    refresh_margin: Option<Duration>,
    current: Mutex<Option<Token>>,
    /// Number of completed exchanges; only written while `current` is locked.
    generation: AtomicU64,
}

impl<E: TokenEndpoint> TokenManager<E> {
    /// Creates a manager without persistence that exchanges on every call.
    #[must_use]
    pub fn new(endpoint: E, credentials: Credentials) -> Self {
        Self {
            endpoint,
            credentials,
            store: None,
            refresh_margin: None,
            current: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// Persists tokens to, and initially loads them from, `store`.
    #[must_use]
    pub fn with_store(mut self, store: TokenStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Returns a cached token without exchange while it stays valid for
    /// longer than `margin`.
    #[must_use]
    pub fn with_refresh_margin(mut self, margin: Duration) -> Self {
        self.refresh_margin = Some(margin);
        self
    }

    /// Returns the token store, if any.
    #[must_use]
    pub fn store(&self) -> Option<&TokenStore> {
        self.store.as_ref()
    }

    /// Returns the token endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// Returns a valid token, acquiring one if needed.
    ///
    /// # Errors
    ///
    /// Returns `Error::Authentication` if the fresh fetch fails (after a
    /// failed refresh, if one was attempted). The next call starts over.
    pub async fn get_token(&self) -> Result<Token, Error> {
        let observed = self.generation.load(Ordering::Acquire);

        tracing::debug!("Acquiring token lock");
        let mut current = self.current.lock().await;
        tracing::debug!("Acquired token lock");

        if self.generation.load(Ordering::Acquire) != observed {
            if let Some(token) = current.as_ref() {
                tracing::debug!("Reusing token acquired while waiting for the lock");
                return Ok(token.clone());
            }
        }

        if current.is_none() {
            *current = self.load_persisted().await;
        }

        if let (Some(margin), Some(token)) = (self.refresh_margin, current.as_ref()) {
            if token.is_valid_for(margin, Utc::now()) {
                tracing::debug!("Cached token still valid");
                return Ok(token.clone());
            }
        }

        let token = match current.as_ref() {
            None => self.fetch(None).await?,
            Some(known) => match self.endpoint.refresh(&self.credentials, known).await {
                Ok(token) => {
                    tracing::debug!("Token refreshed");
                    token
                }
                Err(e) => {
                    tracing::warn!(
                        kind = e.kind(),
                        error = %e,
                        "Token refresh failed, fetching a new token"
                    );
                    self.fetch(Some(e)).await?
                }
            },
        };

        self.persist(&token).await;
        *current = Some(token.clone());
        self.generation.fetch_add(1, Ordering::AcqRel);
        drop(current);
        tracing::debug!("Released token lock");

        Ok(token)
    }

    /// Forgets the token held in memory.
    ///
    /// The next acquisition starts again from the persisted file.
    pub async fn invalidate(&self) {
        self.current.lock().await.take();
    }

    async fn fetch(&self, refresh: Option<EndpointError>) -> Result<Token, AuthError> {
        match self.endpoint.fetch(&self.credentials).await {
            Ok(token) => {
                tracing::debug!("Token fetched with client credentials");
                Ok(token)
            }
            Err(fetch) => {
                tracing::error!(kind = fetch.kind(), error = %fetch, "Token fetch failed");
                Err(AuthError { fetch, refresh })
            }
        }
    }

    async fn load_persisted(&self) -> Option<Token> {
        let store = self.store.as_ref()?;
        match store.load().await {
            Ok(token) => {
                if token.is_some() {
                    tracing::debug!(path = %store.path().display(), "Loaded persisted token");
                }
                token
            }
            Err(e) => {
                tracing::warn!(
                    path = %store.path().display(),
                    error = %e,
                    "Ignoring unreadable token file"
                );
                None
            }
        }
    }

    async fn persist(&self, token: &Token) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(token).await {
            tracing::warn!(
                path = %store.path().display(),
                error = %e,
                "Failed to persist token"
            );
        }
    }
}

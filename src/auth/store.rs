// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! On-disk token cache.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::Token;

/// File holding the last acquired token as JSON.
///
/// The file is overwritten on every acquisition and never deleted. There is
/// no schema versioning: a file that does not parse is simply ignored by the
/// [`TokenManager`](super::TokenManager).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// File name used inside a host configuration directory.
    pub const DEFAULT_FILE_NAME: &'static str = ".lumic_oauth2.json";

    /// Creates a store at an exact path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store for [`DEFAULT_FILE_NAME`](Self::DEFAULT_FILE_NAME)
    /// inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::DEFAULT_FILE_NAME))
    }

    /// Returns the path of the token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted token.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be read or does not contain a
    /// token.
    pub async fn load(&self) -> Result<Option<Token>, StoreError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&data)?))
    }

    /// Writes the token, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be written.
    pub async fn save(&self, token: &Token) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_string_pretty(token)?;
        tokio::fs::write(&self.path, data).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600)).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::in_dir(dir.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("nested").join("token.json"));
        let token = Token::bearer("at", 300).with_refresh_token("rt");

        store.save(&token).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(token));
    }

    #[tokio::test]
    async fn save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::in_dir(dir.path());

        store.save(&Token::bearer("first", 300)).await.unwrap();
        store.save(&Token::bearer("second", 300)).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.access_token, "second");
    }

    #[tokio::test]
    async fn garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::in_dir(dir.path());
        std::fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load().await, Err(StoreError::Json(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::in_dir(dir.path());
        store.save(&Token::bearer("at", 300)).await.unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

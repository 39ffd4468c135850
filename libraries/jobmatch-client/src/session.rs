//! Session context: where the token pair lives between requests.
//!
//! The client never reads tokens from a global. A `SessionContext` is handed
//! to [`ApiClient`](crate::ApiClient) at construction and shared with the
//! auth interceptors, so every request and every 401 touches the same store.

use crate::error::{ClientError, Result};
use async_trait::async_trait;
use jobmatch_core::SessionCredentials;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Storage key of the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Persistent home of the session token pair.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current access token, if logged in
    async fn access_token(&self) -> Result<Option<String>>;

    /// Current refresh token, if any
    async fn refresh_token(&self) -> Result<Option<String>>;

    /// Replace the stored tokens
    async fn store(&self, credentials: &SessionCredentials) -> Result<()>;

    /// Remove both tokens
    async fn clear(&self) -> Result<()>;

    /// Both tokens together, if an access token is stored
    async fn credentials(&self) -> Result<Option<SessionCredentials>> {
        let Some(access_token) = self.access_token().await? else {
            return Ok(None);
        };
        Ok(Some(SessionCredentials {
            access_token,
            refresh_token: self.refresh_token().await?,
        }))
    }
}

/// Shared handle to the session store.
pub type SessionContext = Arc<dyn SessionStore>;

/// In-memory store; tokens are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<SessionCredentials>>,
}

impl MemorySessionStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with credentials
    pub fn with_credentials(credentials: SessionCredentials) -> Self {
        Self {
            inner: RwLock::new(Some(credentials)),
        }
    }

    /// Wrap into a shareable context
    pub fn into_context(self) -> SessionContext {
        Arc::new(self)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.inner.read().await.as_ref().map(|c| c.access_token.clone()))
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self
            .inner
            .read()
            .await
            .as_ref()
            .and_then(|c| c.refresh_token.clone()))
    }

    async fn store(&self, credentials: &SessionCredentials) -> Result<()> {
        *self.inner.write().await = Some(credentials.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.inner.write().await = None;
        Ok(())
    }
}

/// On-disk layout: a flat JSON object keyed like browser local storage.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

/// Store backed by a JSON file, so a login survives between runs.
///
/// Writes go through a temporary file and a rename; a missing file means
/// "logged out".
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    /// Store at `path`; the file is created on first login
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the token file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Wrap into a shareable context
    pub fn into_context(self) -> SessionContext {
        Arc::new(self)
    }

    async fn load(&self) -> Result<StoredTokens> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(StoredTokens::default()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ClientError::Session(format!(
                    "Corrupt session file {}: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoredTokens::default()),
            Err(e) => Err(ClientError::Io(e)),
        }
    }

    async fn save(&self, tokens: &StoredTokens) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(tokens)
            .map_err(|e| ClientError::Session(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn access_token(&self) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.access_token)
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.refresh_token)
    }

    async fn store(&self, credentials: &SessionCredentials) -> Result<()> {
        let _guard = self.lock.lock().await;
        let tokens = StoredTokens {
            access_token: Some(credentials.access_token.clone()),
            refresh_token: credentials.refresh_token.clone(),
        };
        self.save(&tokens).await?;
        debug!(path = %self.path.display(), "Session tokens stored");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "Session tokens removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to remove session file");
                Err(ClientError::Io(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.credentials().await.unwrap().is_none());

        store
            .store(&SessionCredentials::new("access", "refresh"))
            .await
            .unwrap();
        assert_eq!(store.access_token().await.unwrap().as_deref(), Some("access"));
        assert_eq!(store.refresh_token().await.unwrap().as_deref(), Some("refresh"));

        store.clear().await.unwrap();
        assert!(store.access_token().await.unwrap().is_none());
        assert!(store.refresh_token().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_uses_fixed_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let store = FileSessionStore::new(&path);

        assert!(store.access_token().await.unwrap().is_none());

        store
            .store(&SessionCredentials::new("a-token", "r-token"))
            .await
            .unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw[ACCESS_TOKEN_KEY], "a-token");
        assert_eq!(raw[REFRESH_TOKEN_KEY], "r-token");

        // A second store over the same file sees the tokens
        let reopened = FileSessionStore::new(&path);
        let creds = reopened.credentials().await.unwrap().unwrap();
        assert_eq!(creds.access_token, "a-token");

        reopened.clear().await.unwrap();
        assert!(!path.exists());
        // Clearing twice is fine
        reopened.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(matches!(
            store.access_token().await,
            Err(ClientError::Session(_))
        ));
    }
}

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::errors::RegistrarError;

/// Key under which the most recent device token is persisted
const DEVICE_TOKEN_KEY: &str = "device_token";

/// Single-slot store for the most recent device token
///
/// The slot is overwritten on every save; no history is kept.
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Reads the stored token, if any
    async fn load(&self) -> Result<Option<String>, RegistrarError>;

    /// Replaces the stored token
    async fn save(&self, token: &str) -> Result<(), RegistrarError>;
}

/// In-memory token store
///
/// Default store when no cache path is configured. Contents do not survive
/// process restart.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, RegistrarError> {
        Ok(self.slot.lock().expect("Token slot lock poisoned").clone())
    }

    async fn save(&self, token: &str) -> Result<(), RegistrarError> {
        *self.slot.lock().expect("Token slot lock poisoned") = Some(token.to_string());
        Ok(())
    }
}

/// File-backed token store
///
/// Persists the token as a single JSON document at the configured path. The
/// document is written whole to a sibling temp file and renamed into place,
/// so a reader sees either the old value or the new one.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a file store persisting at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, RegistrarError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RegistrarError::Store(format!(
                    "Failed to read token cache: {}",
                    e
                )))
            }
        };

        let document: serde_json::Value = serde_json::from_slice(&bytes)
            .map_err(|e| RegistrarError::Store(format!("Failed to parse token cache: {}", e)))?;

        Ok(document
            .get(DEVICE_TOKEN_KEY)
            .and_then(|value| value.as_str())
            .map(str::to_owned))
    }

    async fn save(&self, token: &str) -> Result<(), RegistrarError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                RegistrarError::Store(format!("Failed to create token cache directory: {}", e))
            })?;
        }

        let mut document = serde_json::Map::new();
        document.insert(
            DEVICE_TOKEN_KEY.to_string(),
            serde_json::Value::String(token.to_string()),
        );
        let bytes = serde_json::to_vec(&document)
            .map_err(|e| RegistrarError::Store(format!("Failed to encode token cache: {}", e)))?;

        let staging = self.path.with_extension("tmp");
        tokio::fs::write(&staging, bytes).await.map_err(|e| {
            RegistrarError::Store(format!("Failed to write token cache: {}", e))
        })?;
        tokio::fs::rename(&staging, &self.path).await.map_err(|e| {
            RegistrarError::Store(format!("Failed to replace token cache: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_starts_empty() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_overwrites() {
        let store = MemoryTokenStore::new();

        store.save("01").await.unwrap();
        store.save("02").await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some("02".to_string()));
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("token.json"));

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("token.json");

        let store = FileTokenStore::new(&path);
        store.save("00ff1a").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("00ff1a".to_string()));

        // A fresh store over the same path sees the persisted value
        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.load().await.unwrap(), Some("00ff1a".to_string()));
    }

    #[tokio::test]
    async fn test_file_store_creates_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("token.json"));

        store.save("ab").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("ab".to_string()));
    }
}

use std::{collections::HashMap, io::ErrorKind, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::sync::Mutex;

use crate::errors::{ReadError, WriteError};

/// String key-value storage scoped to one user profile.
#[async_trait]
pub trait KeyValueStoreDatasource: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ServerError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), ServerError>;
    async fn remove(&self, key: &str) -> Result<(), ServerError>;
}

/// Stores each key as its own file inside the profile directory.
pub struct FileKeyValueStoreDatasourceImpl {
    dir: PathBuf,
}

impl FileKeyValueStoreDatasourceImpl {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[async_trait]
impl KeyValueStoreDatasource for FileKeyValueStoreDatasourceImpl {
    async fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        match tokio::fs::read_to_string(self.path(key)).await {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ReadError::with_debug(key, &e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| WriteError::with_debug(key, &e))?;
        tokio::fs::write(self.path(key), value)
            .await
            .map_err(|e| WriteError::with_debug(key, &e))
    }

    async fn remove(&self, key: &str) -> Result<(), ServerError> {
        match tokio::fs::remove_file(self.path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WriteError::with_debug(key, &e)),
        }
    }
}

/// Volatile storage, lost when dropped.
#[derive(Default)]
pub struct InMemoryKeyValueStoreDatasourceImpl {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStoreDatasourceImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStoreDatasource for InMemoryKeyValueStoreDatasourceImpl {
    async fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ServerError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

// Lets the settings and session repositories share one store.
#[async_trait]
impl<T: KeyValueStoreDatasource + ?Sized> KeyValueStoreDatasource for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, ServerError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), ServerError> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), ServerError> {
        (**self).remove(key).await
    }
}

// ABOUTME: CredentialStore implementations: process-local memory and JSON file on disk
// ABOUTME: File store lives under the platform config dir and keeps owner-only permissions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Token store implementations
//!
//! [`MemoryTokenStore`] holds the token for the lifetime of the process and
//! is the right choice for tests and short-lived tools. [`FileTokenStore`]
//! is the device-storage analogue: one JSON document under the platform
//! config directory that survives restarts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::CredentialStore;
use crate::constants::storage;
use crate::errors::{ApiError, ApiResult};

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a token
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryTokenStore {
    async fn load(&self) -> ApiResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn store(&self, token: &str) -> ApiResult<()> {
        *self.token.write().await = Some(token.to_owned());
        Ok(())
    }

    async fn clear(&self) -> ApiResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

/// On-disk representation of the stored credential
#[derive(Debug, Serialize, Deserialize)]
struct StoredCredentials {
    token: String,
    saved_at: DateTime<Utc>,
}

/// Token store backed by a JSON file
///
/// The default location is `<config dir>/halcyon/credentials.json`. The file
/// is created with owner-only permissions on Unix.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at an explicit path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the platform default location
    ///
    /// # Errors
    /// Returns [`ApiError::Storage`] when the platform config directory
    /// cannot be determined.
    pub fn from_default_location() -> ApiResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// The platform default credentials path
    ///
    /// # Errors
    /// Returns [`ApiError::Storage`] when the platform config directory
    /// cannot be determined.
    pub fn default_path() -> ApiResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| ApiError::storage("no config directory on this platform"))?;
        Ok(base.join(storage::CONFIG_DIR).join(storage::CREDENTIALS_FILE))
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(unix)]
    async fn restrict_permissions(path: &Path) -> ApiResult<()> {
        use std::os::unix::fs::PermissionsExt;

        let permissions = std::fs::Permissions::from_mode(0o600);
        tokio::fs::set_permissions(path, permissions)
            .await
            .map_err(|e| ApiError::storage(format!("chmod {}: {e}", path.display())))
    }

    #[cfg(not(unix))]
    async fn restrict_permissions(_path: &Path) -> ApiResult<()> {
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileTokenStore {
    async fn load(&self) -> ApiResult<Option<String>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ApiError::storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let stored: StoredCredentials = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::storage(format!("corrupt credentials file {}: {e}", self.path.display()))
        })?;

        Ok(Some(stored.token))
    }

    async fn store(&self, token: &str) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::storage(format!("create {}: {e}", parent.display())))?;
        }

        let stored = StoredCredentials {
            token: token.to_owned(),
            saved_at: Utc::now(),
        };
        let bytes = serde_json::to_vec_pretty(&stored)
            .map_err(|e| ApiError::storage(format!("encode credentials: {e}")))?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| ApiError::storage(format!("write {}: {e}", self.path.display())))?;

        Self::restrict_permissions(&self.path).await
    }

    async fn clear(&self) -> ApiResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::storage(format!(
                "remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}

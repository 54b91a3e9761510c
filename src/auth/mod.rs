// ABOUTME: Credential lifecycle for the client: bearer token storage and retrieval
// ABOUTME: CredentialStore trait plus in-memory and on-disk implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Credential storage
//!
//! The client never reads ambient global state for authentication. Whoever
//! constructs an [`crate::client::ApiClient`] injects a [`CredentialStore`];
//! the client reads it before every request and the auth endpoints write
//! through it on login, registration, and logout.
//!
//! The token itself is opaque to this crate: an arbitrary string presented
//! back to the backend as `Authorization: Bearer <token>`.
//!
//! ## Module Structure
//! - `token_store` - [`MemoryTokenStore`] and [`FileTokenStore`]

pub mod token_store;

pub use token_store::{FileTokenStore, MemoryTokenStore};

use std::fmt::Debug;

use async_trait::async_trait;

use crate::errors::ApiResult;

/// Storage for the bearer token, injected into the client
///
/// A missing token is a normal state, not an error: requests made without
/// one simply carry no `Authorization` header.
#[async_trait]
pub trait CredentialStore: Debug + Send + Sync {
    /// Read the stored token, if any
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Storage`] when the backing store
    /// exists but cannot be read or parsed.
    async fn load(&self) -> ApiResult<Option<String>>;

    /// Persist a token, replacing any previous one
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Storage`] when the token cannot be
    /// written.
    async fn store(&self, token: &str) -> ApiResult<()>;

    /// Remove the stored token; removing an absent token is not an error
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Storage`] when the backing store
    /// cannot be modified.
    async fn clear(&self) -> ApiResult<()>;
}

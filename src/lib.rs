// ABOUTME: Main library entry point for the Halcyon Health API client
// ABOUTME: Exposes the authenticated HTTP core, typed endpoint groups, and achievement math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

#![deny(unsafe_code)]

//! # Halcyon Client
//!
//! Rust client for the Halcyon Health platform: weight, diet, and exercise
//! tracking, lab reports, AI-generated monthly and weekly plans, and the AI
//! health assistant chat.
//!
//! ## Features
//!
//! - **Bearer-token sessions**: log in once, every later call is
//!   authenticated from the injected credential store
//! - **Typed endpoint groups**: `client.weight()`, `client.diet()`,
//!   `client.plans()`, one small accessor per product area
//! - **One error shape**: every failure is an [`errors::ApiError`] carrying
//!   status and the verbatim response body
//! - **Bounded calls**: a timeout on every request plus optional per-call
//!   deadlines and cancellation tokens
//! - **Client-side achievements**: streaks, weight delta, and consistency
//!   badges computed locally from the user's own history
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use halcyon_client::auth::FileTokenStore;
//! use halcyon_client::client::ApiClient;
//! use halcyon_client::config::ClientConfig;
//! use halcyon_client::errors::ApiResult;
//!
//! #[tokio::main]
//! async fn main() -> ApiResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let store = Arc::new(FileTokenStore::from_default_location()?);
//!     let client = ApiClient::new(config, store)?;
//!
//!     client.auth().login("user@example.com", "password").await?;
//!     let profile = client.auth().current_user().await?;
//!     println!("logged in as {}", profile.email);
//!
//!     Ok(())
//! }
//! ```

/// Achievement calculator over the user's own log history
pub mod achievements;

/// Typed endpoint groups, one per product area
pub mod api;

/// Credential provider trait and the token store implementations
pub mod auth;

/// Authenticated HTTP core: verbs, timeout, cancellation
pub mod client;

/// Client configuration and base URL selection
pub mod config;

/// Route paths, environment variable names, limits, and defaults
pub mod constants;

/// Canonical error type shared by every operation
pub mod errors;

/// Tracing subscriber setup for binaries
pub mod logging;

/// Request and response wire types
pub mod models;

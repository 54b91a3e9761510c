// ABOUTME: Tracing subscriber setup shared by the CLI and anything else embedding the SDK
// ABOUTME: RUST_LOG wins over the caller's default filter when both are set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Logging initialization
//!
//! The library itself only emits `tracing` events and never installs a
//! subscriber; binaries call [`init`] once at startup. The SDK logs request
//! dispatch and outcome at `debug`, failures at `warn`, and never logs
//! tokens or passwords.

use tracing_subscriber::EnvFilter;

use crate::errors::{ApiError, ApiResult};

/// Install the global tracing subscriber
///
/// `default_filter` is a tracing directive string ("info",
/// "halcyon_client=debug") used when `RUST_LOG` is unset.
///
/// # Errors
/// Returns [`ApiError::Config`] for an unparseable filter or when a global
/// subscriber is already installed.
pub fn init(default_filter: &str) -> ApiResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| ApiError::config(format!("invalid log filter '{default_filter}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| ApiError::config(format!("logging init failed: {e}")))?;

    Ok(())
}

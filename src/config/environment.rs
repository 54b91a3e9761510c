// ABOUTME: Environment-driven client configuration with local development defaults
// ABOUTME: Base URL resolution (env var, host switch), timeout policy, validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Client configuration
//!
//! Configuration is environment-first with hard local-development defaults:
//! an unset `HALCYON_BASE_URL` means "talk to the dev backend on localhost",
//! never an error. Deployed frontends historically derived the base URL from
//! the page host; [`ClientConfig::for_host`] keeps that switch available for
//! embedders that know their host name.

use std::env;
use std::time::Duration;

use url::Url;

use crate::constants::{defaults, env_vars};
use crate::errors::{ApiError, ApiResult};

/// Configuration for [`crate::client::ApiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all route paths are appended to, without a trailing slash
    pub base_url: String,
    /// Total per-request deadline (connect + transfer + body)
    pub timeout: Duration,
    /// Connection establishment deadline
    pub connect_timeout: Duration,
    /// User-Agent header value sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(defaults::LOCAL_BASE_URL)
    }
}

impl ClientConfig {
    /// Create a configuration for an explicit base URL
    ///
    /// A trailing slash on the base URL is trimmed so route paths (which all
    /// begin with `/`) concatenate cleanly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(defaults::TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
            user_agent: defaults::USER_AGENT.to_owned(),
        }
    }

    /// Build a configuration from the process environment
    ///
    /// `HALCYON_BASE_URL` overrides the base URL; unset falls back to the
    /// local development backend. `HALCYON_TIMEOUT_SECS` overrides the total
    /// request timeout.
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when an override is present but
    /// unparseable, or when the resulting configuration fails validation.
    pub fn from_env() -> ApiResult<Self> {
        let base_url = env::var(env_vars::BASE_URL)
            .unwrap_or_else(|_| defaults::LOCAL_BASE_URL.to_owned());
        let mut config = Self::new(base_url);

        if let Ok(raw) = env::var(env_vars::TIMEOUT_SECS) {
            let secs: u64 = raw.parse().map_err(|_| {
                ApiError::config(format!(
                    "{} must be an integer number of seconds, got {raw:?}",
                    env_vars::TIMEOUT_SECS
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Derive the base URL from a host name
    ///
    /// `localhost` and `127.0.0.1` select the fixed local development
    /// backend; any other host selects that host's reverse-proxied API mount
    /// (`https://<host>/api`).
    #[must_use]
    pub fn for_host(hostname: &str) -> Self {
        if hostname == "localhost" || hostname == "127.0.0.1" {
            Self::new(defaults::LOCAL_BASE_URL)
        } else {
            Self::new(format!("https://{hostname}{}", defaults::PROXY_MOUNT))
        }
    }

    /// Replace the total request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the configuration can actually be used
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when the base URL is empty, relative, or
    /// not `http`/`https`, or when a timeout is zero.
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base URL must not be empty"));
        }

        let parsed = Url::parse(&self.base_url)
            .map_err(|e| ApiError::config(format!("base URL {:?}: {e}", self.base_url)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ApiError::config(format!(
                "base URL scheme must be http or https, got {:?}",
                parsed.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("request timeout must be non-zero"));
        }
        if self.connect_timeout.is_zero() {
            return Err(ApiError::config("connect timeout must be non-zero"));
        }

        Ok(())
    }
}

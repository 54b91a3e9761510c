// ABOUTME: Application constants shared across the client library
// ABOUTME: Route paths, environment variable names, limits, and default values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Constants used throughout the client
//!
//! Route paths are pinned to the `/v1` API surface. The production reverse
//! proxy mounts that surface under `/api`, which belongs to the base URL
//! (see [`crate::config::ClientConfig::for_host`]), never to these paths.

/// Canonical API route paths
pub mod routes {
    /// Login endpoint (form-encoded, OAuth2 password-grant shaped)
    pub const AUTH_LOGIN: &str = "/v1/auth/login";
    /// Registration endpoint (JSON body)
    pub const AUTH_REGISTER: &str = "/v1/auth/register";
    /// Authenticated user profile endpoint
    pub const AUTH_ME: &str = "/v1/auth/me";
    /// Email registration check endpoint (query: `email`)
    pub const AUTH_EMAIL_EXISTS: &str = "/v1/auth/email-exists";

    /// User profile resource
    pub const PROFILE: &str = "/v1/profile";

    /// Weight log collection
    pub const WEIGHT_LOGS: &str = "/v1/weight/logs";

    /// Meal log collection
    pub const DIET_MEALS: &str = "/v1/diet/meals";
    /// Food catalog search (query: `query`, `limit`)
    pub const DIET_FOOD_SEARCH: &str = "/v1/diet/foods/search";

    /// Exercise session collection
    pub const EXERCISE_SESSIONS: &str = "/v1/exercise/sessions";

    /// Lab report collection
    pub const LAB_REPORTS: &str = "/v1/labs/reports";

    /// Monthly plan resource (query: `year`, `month`)
    pub const PLANS_MONTHLY: &str = "/v1/plans/monthly";
    /// Weekly plan collection
    pub const PLANS_WEEKLY: &str = "/v1/plans/weekly";
    /// AI weekly plan generation endpoint
    pub const PLANS_WEEKLY_GENERATE: &str = "/v1/plans/weekly/generate";

    /// Chat conversation collection
    pub const CHAT_CONVERSATIONS: &str = "/v1/chat/conversations";
    /// Chat message send endpoint
    pub const CHAT_MESSAGES: &str = "/v1/chat/messages";
}

/// Environment variable names recognized by [`crate::config::ClientConfig::from_env`]
pub mod env_vars {
    /// Overrides the API base URL
    pub const BASE_URL: &str = "HALCYON_BASE_URL";
    /// Overrides the total request timeout, in seconds
    pub const TIMEOUT_SECS: &str = "HALCYON_TIMEOUT_SECS";
}

/// Default configuration values
pub mod defaults {
    /// Base URL of a local development backend
    pub const LOCAL_BASE_URL: &str = "http://localhost:8000";
    /// Path prefix the production reverse proxy mounts the API under
    pub const PROXY_MOUNT: &str = "/api";
    /// Total per-request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;
    /// Connection establishment timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
    /// User-Agent sent with every request
    pub const USER_AGENT: &str = concat!("halcyon-client/", env!("CARGO_PKG_VERSION"));
}

/// Credential storage locations
pub mod storage {
    /// Directory under the platform config dir holding client state
    pub const CONFIG_DIR: &str = "halcyon";
    /// Credentials file name inside [`CONFIG_DIR`]
    pub const CREDENTIALS_FILE: &str = "credentials.json";
}

/// Request limits enforced client-side before dispatch
pub mod limits {
    /// Maximum food search page size accepted by the backend
    pub const MAX_FOOD_SEARCH_LIMIT: u32 = 200;
    /// Maximum plausible weight entry in kilograms
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Minimum password length accepted at registration
    pub const MIN_PASSWORD_LEN: usize = 8;
}

/// User-facing validation message fragments
pub mod error_messages {
    /// Email does not look like an address
    pub const INVALID_EMAIL_FORMAT: &str = "Email address is not valid";
    /// Password fails the minimum length requirement
    pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
    /// A search was issued with an empty query string
    pub const EMPTY_SEARCH_QUERY: &str = "Search query cannot be empty";
}

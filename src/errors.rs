// ABOUTME: Unified error type for every fallible operation in the client
// ABOUTME: ApiError enum with constructors, HTTP body normalization, and ApiResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Canonical client error type
//!
//! Historically the platform's clients surfaced failures in three different
//! shapes: raw response body text, a parsed JSON `detail` field, and
//! `{success, message}` envelopes returned with HTTP 200. This module
//! collapses all of them into one tagged [`ApiError`]: callers match on a
//! variant instead of guessing which convention a given endpoint follows.
//!
//! The raw response body is never discarded — [`ApiError::Http`] keeps it
//! verbatim alongside the normalized message.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenience alias for results produced by this crate
pub type ApiResult<T> = Result<T, ApiError>;

/// All failure modes of a client operation
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, connection refused, TLS, broken pipe
    #[error("network error: {message}")]
    Network {
        /// Description from the underlying HTTP stack
        message: String,
    },

    /// The request exceeded its deadline
    #[error("request timed out: {message}")]
    Timeout {
        /// Description of the timed-out operation
        message: String,
    },

    /// The caller's cancellation token fired before the response arrived
    #[error("request cancelled: {message}")]
    Cancelled {
        /// Description of the cancelled operation
        message: String,
    },

    /// The server answered with a non-success status code
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code of the response
        status: u16,
        /// Normalized message: the body's JSON `detail` field when present,
        /// otherwise the body text, otherwise the status reason phrase
        message: String,
        /// Verbatim response body text
        body: String,
    },

    /// The server answered 200 with a `{success: false}` envelope
    #[error("application error: {message}")]
    Application {
        /// Message carried by the envelope
        message: String,
    },

    /// The response body could not be deserialized into the expected type
    #[error("response decode error: {message}")]
    Decode {
        /// Deserialization failure description
        message: String,
    },

    /// The request body could not be serialized
    #[error("request serialize error: {message}")]
    Serialize {
        /// Serialization failure description
        message: String,
    },

    /// Client-side validation rejected the input before any request was made
    #[error("invalid input: {message}")]
    InvalidInput {
        /// What was wrong with the input
        message: String,
    },

    /// The client configuration is unusable
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// The credential store could not be read or written
    #[error("credential storage error: {message}")]
    Storage {
        /// Underlying storage failure description
        message: String,
    },
}

impl ApiError {
    /// Transport-level failure
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Deadline exceeded
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Cancellation token fired
    #[must_use]
    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::Cancelled {
            message: message.into(),
        }
    }

    /// Non-success status with an already-normalized message
    #[must_use]
    pub fn http_status(status: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: body.into(),
        }
    }

    /// Non-success status from a raw response body
    ///
    /// Prefers the backend's JSON `detail` field as the message when the body
    /// carries one, then the body text verbatim, then the status reason
    /// phrase for empty bodies. The raw body is preserved either way.
    #[must_use]
    pub fn http_response(status: StatusCode, body: String) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(serde_json::Value::as_str)
                    .map(ToOwned::to_owned)
            });

        let message = detail.unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown status").to_owned()
            } else {
                body.clone()
            }
        });

        Self::Http {
            status: status.as_u16(),
            message,
            body,
        }
    }

    /// Envelope-level failure (`success == false` with HTTP 200)
    #[must_use]
    pub fn application(message: impl Into<String>) -> Self {
        Self::Application {
            message: message.into(),
        }
    }

    /// Response deserialization failure
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Request serialization failure
    #[must_use]
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }

    /// Client-side validation failure
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Unusable client configuration
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Credential store failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// HTTP status code of the failure, when one exists
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the caller's credentials (HTTP 401)
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }

    /// True for transient transport conditions a caller may reasonably retry
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            Self::Decode {
                message: err.to_string(),
            }
        } else {
            Self::Network {
                message: err.to_string(),
            }
        }
    }
}

// ABOUTME: Wire types exchanged with the Halcyon backend, grouped by product area
// ABOUTME: Defines the response envelope newer endpoints wrap their payloads in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Request and response types
//!
//! This module contains all DTOs (Data Transfer Objects) used by the endpoint
//! groups for serialization and deserialization of API requests and responses.
//!
//! Two wire shapes exist on the backend: older endpoints return bare
//! documents, newer ones wrap their payload in [`Envelope`]. Endpoint groups
//! unwrap the envelope before returning, so callers only ever see the inner
//! types defined here.

pub mod chat;
pub mod diet;
pub mod exercise;
pub mod labs;
pub mod plans;
pub mod user;
pub mod weight;

use serde::{Deserialize, Serialize};

use crate::errors::{ApiError, ApiResult};

/// Response envelope used by the newer backend endpoints
///
/// Wraps a payload as `{success, message, data}`. `message` is human-readable
/// and optional; `data` is absent on failure and on pure acknowledgments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Optional human-readable outcome description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The payload, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its payload
    ///
    /// # Errors
    /// Returns [`ApiError::Application`] when `success` is false (carrying
    /// the envelope `message`), and [`ApiError::Decode`] when a successful
    /// envelope arrives without a payload.
    pub fn into_result(self) -> ApiResult<T> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| "request was not successful".to_owned());
            return Err(ApiError::application(message));
        }

        self.data
            .ok_or_else(|| ApiError::decode("successful response envelope carried no data"))
    }
}

/// Acknowledgment returned by the bare (non-enveloped) delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether the resource was removed
    pub deleted: bool,
}

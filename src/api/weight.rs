// ABOUTME: Weight tracking endpoints: log a measurement, read history, delete an entry
// ABOUTME: History is newest-first and optionally capped with a limit parameter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Weight tracking endpoints

use uuid::Uuid;

use crate::client::ApiClient;
use crate::constants::routes;
use crate::errors::ApiResult;
use crate::models::weight::{WeightEntry, WeightLogRequest};
use crate::models::DeleteResponse;

/// Weight tracking endpoints
#[derive(Debug, Clone, Copy)]
pub struct WeightApi<'a> {
    client: &'a ApiClient,
}

impl<'a> WeightApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Record a weight measurement
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::InvalidInput`] when the request
    /// fails client-side validation, before anything is sent.
    pub async fn log(&self, request: &WeightLogRequest) -> ApiResult<WeightEntry> {
        request.validate()?;
        self.client.post(routes::WEIGHT_LOGS, request).await
    }

    /// Weight history, newest first
    ///
    /// `limit` caps the number of entries; `None` returns the full history.
    ///
    /// # Errors
    /// See [`crate::errors::ApiError`].
    pub async fn history(&self, limit: Option<u32>) -> ApiResult<Vec<WeightEntry>> {
        let path = limit.map_or_else(
            || routes::WEIGHT_LOGS.to_owned(),
            |n| format!("{}?limit={n}", routes::WEIGHT_LOGS),
        );
        self.client.get(&path).await
    }

    /// Delete a weight entry
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Http`] with status 404 when the
    /// entry does not exist.
    pub async fn delete(&self, entry_id: Uuid) -> ApiResult<DeleteResponse> {
        let path = format!("{}/{entry_id}", routes::WEIGHT_LOGS);
        self.client.delete(&path).await
    }
}

// ABOUTME: Exercise endpoints: session logging, per-day retrieval, deletion
// ABOUTME: Mirrors the diet group shape with sessions instead of meals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Exercise tracking endpoints

use chrono::NaiveDate;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::constants::routes;
use crate::errors::ApiResult;
use crate::models::exercise::{ExerciseLogRequest, ExerciseSession};
use crate::models::DeleteResponse;

/// Exercise tracking endpoints
#[derive(Debug, Clone, Copy)]
pub struct ExerciseApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ExerciseApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Record an exercise session
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::InvalidInput`] when the request
    /// fails client-side validation, before anything is sent.
    pub async fn log(&self, request: &ExerciseLogRequest) -> ApiResult<ExerciseSession> {
        request.validate()?;
        self.client.post(routes::EXERCISE_SESSIONS, request).await
    }

    /// Sessions performed on a calendar day
    ///
    /// # Errors
    /// See [`crate::errors::ApiError`].
    pub async fn sessions_on(&self, date: NaiveDate) -> ApiResult<Vec<ExerciseSession>> {
        let path = format!("{}?date={date}", routes::EXERCISE_SESSIONS);
        self.client.get(&path).await
    }

    /// Delete an exercise session
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Http`] with status 404 when the
    /// session does not exist.
    pub async fn delete(&self, session_id: Uuid) -> ApiResult<DeleteResponse> {
        let path = format!("{}/{session_id}", routes::EXERCISE_SESSIONS);
        self.client.delete(&path).await
    }
}

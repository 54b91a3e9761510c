// ABOUTME: Exercise tracking wire types for session logging and daily retrieval
// ABOUTME: Sessions are keyed by activity name and duration, calories optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Exercise session types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};

/// A recorded exercise session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseSession {
    /// Unique identifier of the session
    pub id: Uuid,
    /// Activity name, free form ("running", "bench press")
    pub activity: String,
    /// Duration in minutes
    pub duration_min: u32,
    /// Calendar day the session belongs to
    pub performed_on: NaiveDate,
    /// Estimated energy burned in kilocalories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Request to record an exercise session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLogRequest {
    /// Activity name, free form
    pub activity: String,
    /// Duration in minutes
    pub duration_min: u32,
    /// Calendar day of the session; the backend uses today when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performed_on: Option<NaiveDate>,
    /// Estimated energy burned in kilocalories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExerciseLogRequest {
    /// Request for a session dated by the backend
    #[must_use]
    pub fn new(activity: impl Into<String>, duration_min: u32) -> Self {
        Self {
            activity: activity.into(),
            duration_min,
            performed_on: None,
            calories_burned: None,
            note: None,
        }
    }

    /// Pin the session to a calendar day
    #[must_use]
    pub const fn on(mut self, date: NaiveDate) -> Self {
        self.performed_on = Some(date);
        self
    }

    /// Check the request before dispatch
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidInput`] when the activity name is empty or
    /// the duration is zero.
    pub fn validate(&self) -> ApiResult<()> {
        if self.activity.trim().is_empty() {
            return Err(ApiError::invalid_input("Activity name cannot be empty"));
        }
        if self.duration_min == 0 {
            return Err(ApiError::invalid_input(
                "Session duration must be at least one minute",
            ));
        }
        Ok(())
    }
}

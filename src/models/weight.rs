// ABOUTME: Weight tracking wire types for logging and history retrieval
// ABOUTME: Client-side bounds checks run before a log request is dispatched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Weight log types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::limits;
use crate::errors::{ApiError, ApiResult};

/// A recorded weight measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Unique identifier of the entry
    pub id: Uuid,
    /// Measured weight in kilograms
    pub weight_kg: f64,
    /// Calendar day the measurement belongs to
    pub logged_on: NaiveDate,
    /// Free-form note attached to the measurement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// When the entry was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to record a weight measurement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightLogRequest {
    /// Measured weight in kilograms
    pub weight_kg: f64,
    /// Calendar day of the measurement; the backend uses today when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_on: Option<NaiveDate>,
    /// Free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightLogRequest {
    /// Request for a measurement dated by the backend
    #[must_use]
    pub const fn new(weight_kg: f64) -> Self {
        Self {
            weight_kg,
            logged_on: None,
            note: None,
        }
    }

    /// Pin the measurement to a calendar day
    #[must_use]
    pub const fn on(mut self, date: NaiveDate) -> Self {
        self.logged_on = Some(date);
        self
    }

    /// Attach a note
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Check the request before dispatch
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidInput`] when the weight is not a positive
    /// number within the plausible range.
    pub fn validate(&self) -> ApiResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(ApiError::invalid_input("Weight must be a positive number"));
        }
        if self.weight_kg > limits::MAX_WEIGHT_KG {
            return Err(ApiError::invalid_input(format!(
                "Weight exceeds the plausible maximum of {} kg",
                limits::MAX_WEIGHT_KG
            )));
        }
        Ok(())
    }
}

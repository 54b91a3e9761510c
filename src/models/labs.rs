// ABOUTME: Lab report wire types for uploading bloodwork and reading past reports
// ABOUTME: Markers carry their reference range flag so screens can highlight outliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Lab report types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};

/// Position of a marker value relative to its reference range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerFlag {
    /// Below the reference range
    Low,
    /// Inside the reference range
    Normal,
    /// Above the reference range
    High,
}

/// A single measured lab marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabMarker {
    /// Marker name ("LDL cholesterol", "TSH")
    pub name: String,
    /// Measured value
    pub value: f64,
    /// Unit of the value ("mg/dL", "mIU/L")
    pub unit: String,
    /// Laboratory reference range, verbatim from the report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<String>,
    /// Position relative to the reference range, when the backend graded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<MarkerFlag>,
}

/// A stored lab report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabReport {
    /// Unique identifier of the report
    pub id: Uuid,
    /// Report title ("Annual checkup")
    pub title: String,
    /// Day the sample was collected
    pub collected_on: NaiveDate,
    /// Measured markers
    pub markers: Vec<LabMarker>,
    /// AI-generated plain-language summary, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// When the report was uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to upload a lab report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabReportUpload {
    /// Report title
    pub title: String,
    /// Day the sample was collected
    pub collected_on: NaiveDate,
    /// Measured markers
    pub markers: Vec<LabMarker>,
}

impl LabReportUpload {
    /// Check the request before dispatch
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidInput`] when the title is empty or no
    /// markers are present.
    pub fn validate(&self) -> ApiResult<()> {
        if self.title.trim().is_empty() {
            return Err(ApiError::invalid_input("Report title cannot be empty"));
        }
        if self.markers.is_empty() {
            return Err(ApiError::invalid_input(
                "A lab report needs at least one marker",
            ));
        }
        Ok(())
    }
}

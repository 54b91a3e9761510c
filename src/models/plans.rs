// ABOUTME: AI plan wire types for monthly guidance and actionable weekly plans
// ABOUTME: Weekly plan items are the unit of completion tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Monthly and weekly plan types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};

/// Category of a weekly plan item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanItemKind {
    /// Nutrition task ("prep two high-protein lunches")
    Diet,
    /// Training task ("30 min zone 2 run")
    Exercise,
    /// Everything else ("lights out by 23:00")
    Habit,
}

/// One actionable item inside a weekly plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanItem {
    /// Unique identifier of the item
    pub id: Uuid,
    /// Short imperative description
    pub title: String,
    /// Item category
    pub kind: PlanItemKind,
    /// Day the item is scheduled for
    pub scheduled_on: NaiveDate,
    /// Whether the user marked the item done
    pub completed: bool,
}

/// AI-generated guidance for a calendar month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPlan {
    /// Unique identifier of the plan
    pub id: Uuid,
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1 through 12
    pub month: u32,
    /// One-line theme of the month ("build an aerobic base")
    pub focus: String,
    /// Long-form AI narrative for the month
    pub narrative: String,
    /// When the plan was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// AI-generated actionable plan for one week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// Unique identifier of the plan
    pub id: Uuid,
    /// Monthly plan this week belongs to, when derived from one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_plan_id: Option<Uuid>,
    /// Monday of the planned week
    pub week_start: NaiveDate,
    /// Items scheduled across the week
    pub items: Vec<PlanItem>,
    /// When the plan was generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request to generate a weekly plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    /// Monday of the week to plan
    pub week_start: NaiveDate,
    /// Optional theme to steer generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

/// Request to adjust an existing weekly plan with a free-form instruction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanAdjustmentRequest {
    /// What to change, in the user's words ("move the long run to Saturday")
    pub instruction: String,
}

impl PlanAdjustmentRequest {
    /// Build an adjustment request
    #[must_use]
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
        }
    }

    /// Check the request before dispatch
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidInput`] when the instruction is empty.
    pub fn validate(&self) -> ApiResult<()> {
        if self.instruction.trim().is_empty() {
            return Err(ApiError::invalid_input(
                "Adjustment instruction cannot be empty",
            ));
        }
        Ok(())
    }
}

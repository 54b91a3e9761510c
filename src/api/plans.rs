// ABOUTME: AI plan endpoints: monthly guidance, weekly plans, generation and adjustment
// ABOUTME: All plan endpoints are enveloped; wrappers unwrap before returning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! AI plan endpoints

use serde_json::json;
use uuid::Uuid;

use crate::client::{ApiClient, RequestOptions};
use crate::constants::routes;
use crate::errors::{ApiError, ApiResult};
use crate::models::plans::{
    GeneratePlanRequest, MonthlyPlan, PlanAdjustmentRequest, PlanItem, WeeklyPlan,
};
use crate::models::Envelope;

/// AI plan endpoints
#[derive(Debug, Clone, Copy)]
pub struct PlansApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PlansApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Monthly guidance for a calendar month
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::InvalidInput`] for a month outside
    /// 1 through 12, before anything is sent.
    pub async fn monthly(&self, year: i32, month: u32) -> ApiResult<MonthlyPlan> {
        if !(1..=12).contains(&month) {
            return Err(ApiError::invalid_input(format!(
                "Month must be 1 through 12, got {month}"
            )));
        }

        let path = format!("{}?year={year}&month={month}", routes::PLANS_MONTHLY);
        let envelope: Envelope<MonthlyPlan> = self.client.get(&path).await?;
        envelope.into_result()
    }

    /// One weekly plan by id
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Http`] with status 404 when the
    /// plan does not exist.
    pub async fn weekly(&self, plan_id: Uuid) -> ApiResult<WeeklyPlan> {
        let path = format!("{}/{plan_id}", routes::PLANS_WEEKLY);
        let envelope: Envelope<WeeklyPlan> = self.client.get(&path).await?;
        envelope.into_result()
    }

    /// Generate a weekly plan
    ///
    /// Generation runs the AI pipeline server-side and can take tens of
    /// seconds; callers with a UI should use [`Self::generate_weekly_with`]
    /// to set a longer deadline or attach a cancellation token.
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Application`] when the backend
    /// declines to generate (for example, an incomplete profile).
    pub async fn generate_weekly(&self, request: &GeneratePlanRequest) -> ApiResult<WeeklyPlan> {
        self.generate_weekly_with(request, RequestOptions::new())
            .await
    }

    /// Generate a weekly plan with per-call overrides
    ///
    /// # Errors
    /// See [`Self::generate_weekly`].
    pub async fn generate_weekly_with(
        &self,
        request: &GeneratePlanRequest,
        options: RequestOptions,
    ) -> ApiResult<WeeklyPlan> {
        let envelope: Envelope<WeeklyPlan> = self
            .client
            .post_with(routes::PLANS_WEEKLY_GENERATE, request, options)
            .await?;
        envelope.into_result()
    }

    /// Adjust a weekly plan with a free-form instruction
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::InvalidInput`] for an empty
    /// instruction, before anything is sent.
    pub async fn adjust_weekly(
        &self,
        plan_id: Uuid,
        request: &PlanAdjustmentRequest,
    ) -> ApiResult<WeeklyPlan> {
        request.validate()?;

        let path = format!("{}/{plan_id}/adjust", routes::PLANS_WEEKLY);
        let envelope: Envelope<WeeklyPlan> = self.client.post(&path, request).await?;
        envelope.into_result()
    }

    /// Mark a plan item as completed
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Http`] with status 404 when the
    /// plan or item does not exist.
    pub async fn complete_item(&self, plan_id: Uuid, item_id: Uuid) -> ApiResult<PlanItem> {
        let path = format!("{}/{plan_id}/items/{item_id}/complete", routes::PLANS_WEEKLY);
        let envelope: Envelope<PlanItem> = self.client.post(&path, &json!({})).await?;
        envelope.into_result()
    }
}

// ABOUTME: Diet endpoints: meal logging, per-day retrieval, and food catalog search
// ABOUTME: Search bounds are enforced client-side before the request is dispatched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Diet tracking and food search endpoints

use chrono::NaiveDate;
use url::form_urlencoded;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::constants::{error_messages, limits, routes};
use crate::errors::{ApiError, ApiResult};
use crate::models::diet::{FoodSearchResponse, MealLog, MealLogRequest};
use crate::models::DeleteResponse;

/// Diet tracking and food search endpoints
#[derive(Debug, Clone, Copy)]
pub struct DietApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DietApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Record a meal
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::InvalidInput`] when the request
    /// fails client-side validation, before anything is sent.
    pub async fn log_meal(&self, request: &MealLogRequest) -> ApiResult<MealLog> {
        request.validate()?;
        self.client.post(routes::DIET_MEALS, request).await
    }

    /// Meals logged on a calendar day
    ///
    /// # Errors
    /// See [`crate::errors::ApiError`].
    pub async fn meals_on(&self, date: NaiveDate) -> ApiResult<Vec<MealLog>> {
        let path = format!("{}?date={date}", routes::DIET_MEALS);
        self.client.get(&path).await
    }

    /// Delete a meal entry
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::Http`] with status 404 when the
    /// entry does not exist.
    pub async fn delete_meal(&self, meal_id: Uuid) -> ApiResult<DeleteResponse> {
        let path = format!("{}/{meal_id}", routes::DIET_MEALS);
        self.client.delete(&path).await
    }

    /// Search the food catalog
    ///
    /// `limit` caps the number of matches, 1 through
    /// [`limits::MAX_FOOD_SEARCH_LIMIT`].
    ///
    /// # Errors
    /// Returns [`crate::errors::ApiError::InvalidInput`] for an empty query
    /// or an out-of-range limit, before anything is sent.
    pub async fn search_foods(&self, query: &str, limit: u32) -> ApiResult<FoodSearchResponse> {
        if query.trim().is_empty() {
            return Err(ApiError::invalid_input(error_messages::EMPTY_SEARCH_QUERY));
        }
        if limit == 0 || limit > limits::MAX_FOOD_SEARCH_LIMIT {
            return Err(ApiError::invalid_input(format!(
                "Search limit must be between 1 and {}",
                limits::MAX_FOOD_SEARCH_LIMIT
            )));
        }

        let params = form_urlencoded::Serializer::new(String::new())
            .append_pair("query", query)
            .append_pair("limit", &limit.to_string())
            .finish();
        let path = format!("{}?{params}", routes::DIET_FOOD_SEARCH);

        self.client.get(&path).await
    }
}

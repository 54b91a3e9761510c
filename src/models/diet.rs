// ABOUTME: Diet tracking wire types for meal logging and food catalog search
// ABOUTME: Macro fields are optional because free-form meal entries often lack them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Meal log and food search types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ApiError, ApiResult};

/// Meal slot a log entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Anything between meals
    Snack,
}

/// A recorded meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLog {
    /// Unique identifier of the entry
    pub id: Uuid,
    /// Meal slot
    pub meal_type: MealType,
    /// What was eaten, free form
    pub description: String,
    /// Calendar day the meal belongs to
    pub eaten_on: NaiveDate,
    /// Energy in kilocalories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

/// Request to record a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLogRequest {
    /// Meal slot
    pub meal_type: MealType,
    /// What was eaten, free form
    pub description: String,
    /// Calendar day of the meal; the backend uses today when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eaten_on: Option<NaiveDate>,
    /// Energy in kilocalories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

impl MealLogRequest {
    /// Request for a meal dated by the backend, macros unknown
    #[must_use]
    pub fn new(meal_type: MealType, description: impl Into<String>) -> Self {
        Self {
            meal_type,
            description: description.into(),
            eaten_on: None,
            calories: None,
            protein_g: None,
            carbs_g: None,
            fat_g: None,
        }
    }

    /// Pin the meal to a calendar day
    #[must_use]
    pub const fn on(mut self, date: NaiveDate) -> Self {
        self.eaten_on = Some(date);
        self
    }

    /// Attach a calorie count
    #[must_use]
    pub const fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Check the request before dispatch
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidInput`] when the description is empty.
    pub fn validate(&self) -> ApiResult<()> {
        if self.description.trim().is_empty() {
            return Err(ApiError::invalid_input("Meal description cannot be empty"));
        }
        Ok(())
    }
}

/// One match from the food catalog search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodHit {
    /// Catalog identifier of the food
    pub id: Uuid,
    /// Food name
    pub name: String,
    /// Brand name for packaged foods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Energy per 100 g in kilocalories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories_per_100g: Option<f64>,
    /// Protein per 100 g in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates per 100 g in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat per 100 g in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

/// Food catalog search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSearchResponse {
    /// Matches for the query, best first
    pub foods: Vec<FoodHit>,
    /// Total number of matches in the catalog
    pub total: u32,
}

// ABOUTME: Daily tracking commands for halcyon-cli: weight, meals, workouts, food search
// ABOUTME: List commands default their day to today in the local timezone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use halcyon_client::client::ApiClient;
use halcyon_client::models::diet::{MealLogRequest, MealType};
use halcyon_client::models::exercise::ExerciseLogRequest;
use halcyon_client::models::weight::WeightLogRequest;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_meal_type(value: &str) -> Result<MealType> {
    match value.to_lowercase().as_str() {
        "breakfast" => Ok(MealType::Breakfast),
        "lunch" => Ok(MealType::Lunch),
        "dinner" => Ok(MealType::Dinner),
        "snack" => Ok(MealType::Snack),
        other => anyhow::bail!(
            "unknown meal type '{other}' (expected breakfast, lunch, dinner, or snack)"
        ),
    }
}

/// Record a weight measurement
pub async fn weight_log(
    client: &ApiClient,
    kg: f64,
    date: Option<NaiveDate>,
    note: Option<String>,
) -> Result<()> {
    let mut request = WeightLogRequest::new(kg);
    if let Some(date) = date {
        request = request.on(date);
    }
    if let Some(note) = note {
        request = request.with_note(note);
    }

    let entry = client
        .weight()
        .log(&request)
        .await
        .context("failed to log weight")?;

    println!("Logged {} kg on {}", entry.weight_kg, entry.logged_on);
    Ok(())
}

/// Show weight history, newest first
pub async fn weight_list(client: &ApiClient, limit: Option<u32>) -> Result<()> {
    let entries = client
        .weight()
        .history(limit)
        .await
        .context("failed to fetch weight history")?;

    if entries.is_empty() {
        println!("No weight entries yet");
        return Ok(());
    }
    for entry in entries {
        let note = entry.note.map_or_else(String::new, |n| format!("  ({n})"));
        println!("{}  {:.1} kg  {}{note}", entry.logged_on, entry.weight_kg, entry.id);
    }
    Ok(())
}

/// Delete a weight entry
pub async fn weight_delete(client: &ApiClient, id: Uuid) -> Result<()> {
    client
        .weight()
        .delete(id)
        .await
        .context("failed to delete the entry")?;

    println!("Deleted {id}");
    Ok(())
}

/// Record a meal
pub async fn meal_log(
    client: &ApiClient,
    meal_type: &str,
    description: &str,
    calories: Option<f64>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let mut request = MealLogRequest::new(parse_meal_type(meal_type)?, description);
    if let Some(date) = date {
        request = request.on(date);
    }
    if let Some(calories) = calories {
        request = request.with_calories(calories);
    }

    let meal = client
        .diet()
        .log_meal(&request)
        .await
        .context("failed to log the meal")?;

    println!("Logged {:?} on {}: {}", meal.meal_type, meal.eaten_on, meal.description);
    Ok(())
}

/// Show meals for a day
pub async fn meal_list(client: &ApiClient, date: Option<NaiveDate>) -> Result<()> {
    let day = date.unwrap_or_else(today);
    let meals = client
        .diet()
        .meals_on(day)
        .await
        .context("failed to fetch meals")?;

    if meals.is_empty() {
        println!("No meals logged on {day}");
        return Ok(());
    }
    for meal in meals {
        let calories = meal
            .calories
            .map_or_else(String::new, |c| format!("  {c:.0} kcal"));
        println!("{:?}: {}{calories}", meal.meal_type, meal.description);
    }
    Ok(())
}

/// Search the food catalog
pub async fn food_search(client: &ApiClient, query: &str, limit: u32) -> Result<()> {
    let results = client
        .diet()
        .search_foods(query, limit)
        .await
        .context("food search failed")?;

    if results.foods.is_empty() {
        println!("No matches for '{query}'");
        return Ok(());
    }
    println!("{} of {} matches:", results.foods.len(), results.total);
    for food in results.foods {
        let brand = food.brand.map_or_else(String::new, |b| format!(" [{b}]"));
        let calories = food
            .calories_per_100g
            .map_or_else(String::new, |c| format!("  {c:.0} kcal/100g"));
        println!("- {}{brand}{calories}", food.name);
    }
    Ok(())
}

/// Record an exercise session
pub async fn workout_log(
    client: &ApiClient,
    activity: &str,
    minutes: u32,
    calories: Option<f64>,
    date: Option<NaiveDate>,
) -> Result<()> {
    let mut request = ExerciseLogRequest::new(activity, minutes);
    if let Some(date) = date {
        request = request.on(date);
    }
    request.calories_burned = calories;

    let session = client
        .exercise()
        .log(&request)
        .await
        .context("failed to log the workout")?;

    println!(
        "Logged {} for {} min on {}",
        session.activity, session.duration_min, session.performed_on
    );
    Ok(())
}

/// Show exercise sessions for a day
pub async fn workout_list(client: &ApiClient, date: Option<NaiveDate>) -> Result<()> {
    let day = date.unwrap_or_else(today);
    let sessions = client
        .exercise()
        .sessions_on(day)
        .await
        .context("failed to fetch workouts")?;

    if sessions.is_empty() {
        println!("No workouts logged on {day}");
        return Ok(());
    }
    for session in sessions {
        let calories = session
            .calories_burned
            .map_or_else(String::new, |c| format!("  {c:.0} kcal"));
        println!("{} - {} min{calories}", session.activity, session.duration_min);
    }
    Ok(())
}

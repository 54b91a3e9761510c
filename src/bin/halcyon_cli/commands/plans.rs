// ABOUTME: AI plan commands for halcyon-cli: monthly guidance, weekly plans, item completion
// ABOUTME: Generation and adjustment wait on the backend AI pipeline, so they log progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

use anyhow::{Context, Result};
use chrono::NaiveDate;
use uuid::Uuid;

use halcyon_client::client::ApiClient;
use halcyon_client::models::plans::{GeneratePlanRequest, PlanAdjustmentRequest, WeeklyPlan};

fn print_weekly(plan: &WeeklyPlan) {
    println!("Week of {}  ({})", plan.week_start, plan.id);
    for item in &plan.items {
        let mark = if item.completed { "x" } else { " " };
        println!("  [{mark}] {}  {:?}  {}", item.scheduled_on, item.kind, item.title);
    }
}

/// Show the monthly guidance
pub async fn monthly(client: &ApiClient, year: i32, month: u32) -> Result<()> {
    let plan = client
        .plans()
        .monthly(year, month)
        .await
        .context("failed to fetch the monthly plan")?;

    println!("{}-{:02}: {}", plan.year, plan.month, plan.focus);
    println!("\n{}", plan.narrative);
    Ok(())
}

/// Show a weekly plan
pub async fn weekly(client: &ApiClient, id: Uuid) -> Result<()> {
    let plan = client
        .plans()
        .weekly(id)
        .await
        .context("failed to fetch the weekly plan")?;

    print_weekly(&plan);
    Ok(())
}

/// Generate a weekly plan
pub async fn generate(
    client: &ApiClient,
    week_start: NaiveDate,
    focus: Option<String>,
) -> Result<()> {
    println!("Generating a plan for the week of {week_start}...");

    let request = GeneratePlanRequest { week_start, focus };
    let plan = client
        .plans()
        .generate_weekly(&request)
        .await
        .context("plan generation failed")?;

    print_weekly(&plan);
    Ok(())
}

/// Adjust a weekly plan with a free-form instruction
pub async fn adjust(client: &ApiClient, id: Uuid, instruction: &str) -> Result<()> {
    println!("Adjusting the plan...");

    let request = PlanAdjustmentRequest::new(instruction);
    let plan = client
        .plans()
        .adjust_weekly(id, &request)
        .await
        .context("plan adjustment failed")?;

    print_weekly(&plan);
    Ok(())
}

/// Mark a plan item as done
pub async fn complete(client: &ApiClient, plan: Uuid, item: Uuid) -> Result<()> {
    let item = client
        .plans()
        .complete_item(plan, item)
        .await
        .context("failed to complete the item")?;

    println!("Done: {}", item.title);
    Ok(())
}

// ABOUTME: Lab report commands for halcyon-cli: list reports, show one with markers
// ABOUTME: Marker flags render as arrows so outliers stand out in the terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

use anyhow::{Context, Result};
use uuid::Uuid;

use halcyon_client::client::ApiClient;
use halcyon_client::models::labs::MarkerFlag;

/// List lab reports, newest first
pub async fn list(client: &ApiClient) -> Result<()> {
    let reports = client
        .labs()
        .reports()
        .await
        .context("failed to fetch lab reports")?;

    if reports.is_empty() {
        println!("No lab reports uploaded yet");
        return Ok(());
    }
    for report in reports {
        println!(
            "{}  {}  ({} markers)  {}",
            report.collected_on,
            report.title,
            report.markers.len(),
            report.id
        );
    }
    Ok(())
}

/// Show one report with all markers
pub async fn show(client: &ApiClient, id: Uuid) -> Result<()> {
    let report = client
        .labs()
        .report(id)
        .await
        .context("failed to fetch the report")?;

    println!("{} ({})", report.title, report.collected_on);
    for marker in &report.markers {
        let flag = match marker.flag {
            Some(MarkerFlag::High) => " ^",
            Some(MarkerFlag::Low) => " v",
            Some(MarkerFlag::Normal) | None => "",
        };
        let range = marker
            .reference_range
            .as_deref()
            .map_or_else(String::new, |r| format!("  [{r}]"));
        println!("  {}: {} {}{range}{flag}", marker.name, marker.value, marker.unit);
    }
    if let Some(summary) = report.summary {
        println!("\n{summary}");
    }
    Ok(())
}

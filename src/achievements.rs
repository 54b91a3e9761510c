// ABOUTME: Client-side gamification calculator over the user's own log history
// ABOUTME: Pure date and weight arithmetic, no persistence and no network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Halcyon Health

//! Achievement calculator
//!
//! Badges are computed on the client from data the screens already hold, so
//! the backend stores nothing about them. All functions are pure: `today` is
//! a parameter, duplicate same-day logs count once, and input order does not
//! matter.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::weight::WeightEntry;

/// Consecutive-day logging streaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    /// Days in the streak that is still alive (ends today or yesterday)
    pub current: u32,
    /// Days in the longest streak ever recorded
    pub longest: u32,
}

/// Change between the earliest and latest weight entries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightDelta {
    /// Earliest recorded weight in kilograms
    pub start_kg: f64,
    /// Day of the earliest record
    pub start_on: NaiveDate,
    /// Latest recorded weight in kilograms
    pub latest_kg: f64,
    /// Day of the latest record
    pub latest_on: NaiveDate,
    /// Latest minus earliest; negative means weight lost
    pub change_kg: f64,
}

/// An earned badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// Stable badge identifier ("streak-7")
    pub code: String,
    /// Short display title
    pub title: String,
    /// One-line description of what was achieved
    pub description: String,
}

/// Everything the badge evaluation looks at
#[derive(Debug, Clone)]
pub struct AchievementInput {
    /// The day to evaluate against, normally today in the user's timezone
    pub today: NaiveDate,
    /// Days on which the user logged anything (weight, meal, or workout)
    pub log_dates: Vec<NaiveDate>,
    /// Full weight history
    pub weight_entries: Vec<WeightEntry>,
}

/// Streak badge thresholds in days, paired with badge identity
const STREAK_BADGES: &[(u32, &str, &str)] = &[
    (3, "streak-3", "Three days in a row"),
    (7, "streak-7", "One full week of logging"),
    (30, "streak-30", "Thirty consecutive days"),
];

/// Weight-loss badge thresholds in kilograms lost
const WEIGHT_BADGES: &[(f64, &str, &str)] = &[
    (1.0, "first-kilo", "First kilogram down"),
    (5.0, "five-down", "Five kilograms down"),
];

/// Completion ratio needed for the consistency badge, over its window
const CONSISTENCY_RATIO: f64 = 0.8;
/// Window of the consistency badge in days
const CONSISTENCY_WINDOW_DAYS: u32 = 30;

/// Compute current and longest logging streaks
///
/// A streak is a run of consecutive calendar days each holding at least one
/// log. The current streak must still be alive: its last day is `today` or
/// yesterday (logging later today keeps it going). Duplicate dates count
/// once and input order does not matter.
#[must_use]
pub fn logging_streaks(dates: &[NaiveDate], today: NaiveDate) -> StreakSummary {
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();

    let mut longest: u32 = 0;
    let mut run: u32 = 0;
    let mut previous: Option<NaiveDate> = None;
    for &day in &days {
        run = match previous.and_then(|p| p.checked_add_days(Days::new(1))) {
            Some(next) if next == day => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    let mut current: u32 = 0;
    let anchor = if days.contains(&today) {
        Some(today)
    } else {
        today
            .checked_sub_days(Days::new(1))
            .filter(|yesterday| days.contains(yesterday))
    };
    if let Some(mut day) = anchor {
        current = 1;
        while let Some(prior) = day.checked_sub_days(Days::new(1)) {
            if !days.contains(&prior) {
                break;
            }
            current += 1;
            day = prior;
        }
    }

    StreakSummary { current, longest }
}

/// Change between the earliest and latest weight entries
///
/// Returns `None` for an empty history; a single entry yields a zero delta.
/// Entries tied on the same day resolve to the first for the start and the
/// last for the latest, matching their storage order.
#[must_use]
pub fn weight_delta(entries: &[WeightEntry]) -> Option<WeightDelta> {
    let start = entries.iter().min_by_key(|e| e.logged_on)?;
    let latest = entries.iter().max_by_key(|e| e.logged_on)?;

    Some(WeightDelta {
        start_kg: start.weight_kg,
        start_on: start.logged_on,
        latest_kg: latest.weight_kg,
        latest_on: latest.logged_on,
        change_kg: latest.weight_kg - start.weight_kg,
    })
}

/// Fraction of the trailing window with at least one log
///
/// The window is the `window_days` calendar days ending at `today`
/// inclusive. Duplicate dates count once; a zero-day window yields 0.0.
#[must_use]
pub fn completion_ratio(dates: &[NaiveDate], window_days: u32, today: NaiveDate) -> f64 {
    if window_days == 0 {
        return 0.0;
    }

    let Some(window_start) = today.checked_sub_days(Days::new(u64::from(window_days) - 1)) else {
        return 0.0;
    };

    let covered: BTreeSet<NaiveDate> = dates
        .iter()
        .copied()
        .filter(|d| *d >= window_start && *d <= today)
        .collect();

    covered.len() as f64 / f64::from(window_days)
}

/// Evaluate every badge against the input
///
/// Returns earned badges in a stable order: streaks, then weight loss, then
/// consistency. An empty input earns nothing.
#[must_use]
pub fn evaluate(input: &AchievementInput) -> Vec<Achievement> {
    let mut earned = Vec::new();

    let streaks = logging_streaks(&input.log_dates, input.today);
    for &(threshold, code, title) in STREAK_BADGES {
        if streaks.longest >= threshold {
            earned.push(Achievement {
                code: code.to_owned(),
                title: title.to_owned(),
                description: format!("Logged {threshold} days in a row"),
            });
        }
    }

    if let Some(delta) = weight_delta(&input.weight_entries) {
        let lost_kg = -delta.change_kg;
        for &(threshold, code, title) in WEIGHT_BADGES {
            if lost_kg >= threshold {
                earned.push(Achievement {
                    code: code.to_owned(),
                    title: title.to_owned(),
                    description: format!("Down {threshold} kg since the first entry"),
                });
            }
        }
    }

    let ratio = completion_ratio(&input.log_dates, CONSISTENCY_WINDOW_DAYS, input.today);
    if ratio >= CONSISTENCY_RATIO {
        earned.push(Achievement {
            code: "consistent-month".to_owned(),
            title: "Consistency pays".to_owned(),
            description: format!(
                "Logged on {}% of the last {CONSISTENCY_WINDOW_DAYS} days",
                (ratio * 100.0).round() as i64
            ),
        });
    }

    earned
}

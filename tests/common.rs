// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Fixed clock, request builders and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `stride_coach`

use std::env;
use std::sync::Once;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use stride_coach::{
    ExperienceLevel, PlanGenerationRequest, PlanPreferences, RaceDistance, RunRecord,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Monday 2026-10-19, 07:30 UTC
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 7, 30, 0).unwrap()
}

/// Wednesday 2026-10-21, 18:00 UTC
pub fn midweek_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 21, 18, 0, 0).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Intermediate runner at the given fitness and frequency
pub fn request(race: RaceDistance, vdot: f64, frequency: u8) -> PlanGenerationRequest {
    PlanGenerationRequest::new(
        "runner-1",
        vdot,
        race,
        frequency,
        ExperienceLevel::Intermediate,
    )
}

/// Request with rest-day preferences
pub fn request_with_rest_days(
    race: RaceDistance,
    frequency: u8,
    rest_days: &[u8],
    avoid_back_to_back: bool,
) -> PlanGenerationRequest {
    request(race, 45.0, frequency).preferences(PlanPreferences {
        avoid_back_to_back,
        preferred_rest_days: rest_days.to_vec(),
        max_workout_duration: None,
    })
}

/// Three recent runs around VDOT 45-50
pub fn recent_runs() -> Vec<RunRecord> {
    vec![
        RunRecord {
            distance: 3.1,
            duration: 1_260.0,
            date: date(2026, 10, 4),
        },
        RunRecord {
            distance: 6.2,
            duration: 2_700.0,
            date: date(2026, 10, 11),
        },
        RunRecord {
            distance: 5.0,
            duration: 2_900.0,
            date: date(2026, 10, 15),
        },
    ]
}

// ABOUTME: Command implementations for the stride-plan CLI
// ABOUTME: Input parsing helpers and JSON rendering of engine results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use stride_coach::{
    ErrorResponse, ExperienceLevel, InMemoryPlanRepository, PaceType, PlanBuilder,
    PlanGenerationRequest, PlanError, PlannerConfig, PlanningService, RaceDistance, RunRecord,
    StaticRunHistory, VdotCalculator,
};

/// Race result to VDOT, paces and equivalent times
pub fn vdot(distance: &str, time: &str) -> Result<Value> {
    let miles = parse_distance(distance)?;
    let seconds = parse_time(time)?;
    let vdot = VdotCalculator::calculate_vdot_from_race(miles, seconds).map_err(reject)?;
    let paces = VdotCalculator::get_paces(vdot);
    let equivalents = VdotCalculator::get_equivalent_times(vdot);

    let formatted_paces: Map<String, Value> = PaceType::ALL
        .iter()
        .map(|pace_type| {
            (
                pace_type.label().to_owned(),
                json!(VdotCalculator::format_pace(paces.get(*pace_type))),
            )
        })
        .collect();
    let formatted_times: Map<String, Value> = equivalents
        .as_pairs()
        .iter()
        .map(|(label, seconds)| ((*label).to_owned(), json!(VdotCalculator::format_time(*seconds))))
        .collect();

    Ok(json!({
        "vdot": (vdot * 10.0).round() / 10.0,
        "paces": paces,
        "paces_formatted": formatted_paces,
        "equivalent_times": equivalents,
        "equivalent_times_formatted": formatted_times,
    }))
}

/// Suggested target VDOT
pub fn target(vdot: f64, level: ExperienceLevel, weeks: u32) -> Value {
    let current = VdotCalculator::clamp_vdot(vdot);
    json!({
        "current_vdot": current,
        "experience_level": level,
        "weeks": weeks,
        "target_vdot": VdotCalculator::suggest_target_vdot(current, level, weeks),
    })
}

/// Plan plus one materialized week
pub fn plan(
    config: PlannerConfig,
    request_path: &Path,
    week: u32,
    start: Option<NaiveDate>,
) -> Result<Value> {
    let request = read_request(request_path)?;
    let builder = PlanBuilder::with_config(config);
    let now = start_time(start)?;

    let plan = builder.generate_plan_at(&request, now).map_err(reject)?;
    let workouts = builder
        .generate_week_workouts(&plan, week, &request)
        .map_err(reject)?;
    let periodization = builder.periodization();

    Ok(json!({
        "plan": plan,
        "week": {
            "number": week,
            "phase": periodization.phase_for_week(week, plan.total_weeks),
            "progression_factor": periodization.get_progression_factor(week, plan.total_weeks),
            "weekly_mileage": builder.weekly_mileage(&plan, week, &request),
            "workouts": workouts,
        },
    }))
}

/// Scheduled 14-day block stored in an in-memory repository
pub fn block(
    config: PlannerConfig,
    request_path: &Path,
    runs_path: Option<&Path>,
    start: Option<NaiveDate>,
) -> Result<Value> {
    let request = read_request(request_path)?;
    let now = start_time(start)?;

    let history = match runs_path {
        Some(path) => {
            let runs: Vec<RunRecord> = read_json(path)?;
            StaticRunHistory::new().with_runs(request.user_id.clone(), runs)
        }
        None => StaticRunHistory::new(),
    };
    let service = PlanningService::new(
        PlanBuilder::with_config(config),
        InMemoryPlanRepository::new(),
        history,
    );

    let block = if runs_path.is_some() {
        service.start_block_from_history(&request, now)?
    } else {
        service.start_block(&request, now)?
    };
    Ok(serde_json::to_value(block)?)
}

fn read_request(path: &Path) -> Result<PlanGenerationRequest> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn start_time(start: Option<NaiveDate>) -> Result<DateTime<Utc>> {
    match start {
        Some(date) => date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .context("Invalid start date"),
        None => Ok(Utc::now()),
    }
}

/// Attach the serialized error payload to an engine rejection
fn reject(error: PlanError) -> anyhow::Error {
    let payload = serde_json::to_string(&ErrorResponse::from(&error))
        .unwrap_or_else(|_| error.to_string());
    anyhow::Error::new(error).context(payload)
}

/// Race key or distance in miles
fn parse_distance(raw: &str) -> Result<f64> {
    if let Ok(race) = raw.parse::<RaceDistance>() {
        return Ok(race.miles());
    }
    raw.trim()
        .trim_end_matches("mi")
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Unknown distance '{raw}'"))
}

/// `H:MM:SS`, `MM:SS` or plain seconds
fn parse_time(raw: &str) -> Result<f64> {
    let parts: Vec<&str> = raw.trim().split(':').collect();
    let numbers = parts
        .iter()
        .map(|part| part.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .with_context(|| format!("Invalid time '{raw}'"))?;

    let seconds = match numbers.as_slice() {
        [seconds] => *seconds,
        [minutes, seconds] => minutes.mul_add(60.0, *seconds),
        [hours, minutes, seconds] => hours.mul_add(3600.0, minutes.mul_add(60.0, *seconds)),
        _ => bail!("Invalid time '{raw}', expected H:MM:SS, MM:SS or seconds"),
    };
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_formats() {
        assert!((parse_time("20:00").unwrap() - 1200.0).abs() < f64::EPSILON);
        assert!((parse_time("3:30:00").unwrap() - 12_600.0).abs() < f64::EPSILON);
        assert!((parse_time("95").unwrap() - 95.0).abs() < f64::EPSILON);
        assert!(parse_time("1:2:3:4").is_err());
        assert!(parse_time("abc").is_err());
    }

    #[test]
    fn test_parse_distance() {
        assert!((parse_distance("marathon").unwrap() - 26.21875).abs() < 1e-9);
        assert!((parse_distance("3.1").unwrap() - 3.1).abs() < f64::EPSILON);
        assert!((parse_distance("6.2 mi").unwrap() - 6.2).abs() < f64::EPSILON);
        assert!(parse_distance("ultra").is_err());
    }
}

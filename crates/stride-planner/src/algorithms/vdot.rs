// ABOUTME: VDOT calculation with the Daniels-Gilbert oxygen cost and drop-dead equations
// ABOUTME: Race performance to VDOT, VDOT to training paces, race predictions and targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use serde::{Deserialize, Serialize};
use stride_core::constants::daniels::{
    PERCENT_MAX_BASE, PERCENT_MAX_FAST_AMPLITUDE, PERCENT_MAX_FAST_RATE,
    PERCENT_MAX_SLOW_AMPLITUDE, PERCENT_MAX_SLOW_RATE, VO2_A, VO2_B, VO2_C,
};
use stride_core::constants::improvement::{ADVANCED_RATE, BEGINNER_RATE, INTERMEDIATE_RATE};
use stride_core::constants::pace_intensity;
use stride_core::constants::units::{race_miles, METERS_PER_MILE, SECONDS_PER_MINUTE};
use stride_core::constants::vdot::{COLD_START_VDOT, MAX_VDOT, MIN_VDOT, RECENT_RUNS_SAMPLE};
use stride_core::errors::{PlanError, PlanResult};
use stride_core::models::{ExperienceLevel, RunRecord, VdotPaces};

/// Bisection steps when inverting the race formula; each halves the bracket
const BISECTION_ITERATIONS: usize = 100;

/// Fastest velocity considered when inverting the race formula (m/min)
const MAX_SEARCH_VELOCITY: f64 = 1_000.0;

/// Slowest velocity considered when inverting the race formula (m/min)
const MIN_SEARCH_VELOCITY: f64 = 50.0;

/// Predicted race times in seconds for the standard distances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquivalentTimes {
    /// One mile
    pub mile: f64,
    /// 5 kilometers
    pub five_k: f64,
    /// 10 kilometers
    pub ten_k: f64,
    /// Half marathon
    pub half_marathon: f64,
    /// Marathon
    pub marathon: f64,
}

impl EquivalentTimes {
    /// Labelled times, shortest distance first
    #[must_use]
    pub const fn as_pairs(&self) -> [(&'static str, f64); 5] {
        [
            ("mile", self.mile),
            ("5k", self.five_k),
            ("10k", self.ten_k),
            ("half_marathon", self.half_marathon),
            ("marathon", self.marathon),
        ]
    }
}

/// Jack Daniels' VDOT calculator
///
/// Implements the Daniels-Gilbert equations:
///
/// - oxygen cost of running at velocity `v` (m/min):
///   `VO2 = -4.60 + 0.182258·v + 0.000104·v²`
/// - sustainable fraction of `VO2max` for an effort of `t` minutes:
///   `%max = 0.8 + 0.1894393·e^(-0.012778·t) + 0.2989558·e^(-0.1932605·t)`
/// - `VDOT = VO2 / %max`
///
/// # Scientific References
///
/// - Daniels, J. & Gilbert, J. (1979). *Oxygen Power: Performance Tables for Distance Runners.*
/// - Daniels, J. (2013). *Daniels' Running Formula* (3rd ed.). Human Kinetics.
pub struct VdotCalculator;

impl VdotCalculator {
    /// Calculate VDOT from a race performance
    ///
    /// # Arguments
    ///
    /// * `distance_miles` - Race distance in miles
    /// * `time_seconds` - Race time in seconds
    ///
    /// # Returns
    ///
    /// VDOT clamped into [20, 85]
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if distance or time is non-positive or not finite
    pub fn calculate_vdot_from_race(distance_miles: f64, time_seconds: f64) -> PlanResult<f64> {
        Self::require_positive("distance", distance_miles)?;
        Self::require_positive("time_seconds", time_seconds)?;

        let vdot = Self::raw_vdot(
            distance_miles * METERS_PER_MILE,
            time_seconds / SECONDS_PER_MINUTE,
        );
        Ok(Self::clamp_vdot(vdot))
    }

    /// Estimate VDOT from logged runs
    ///
    /// Runs without a positive distance and duration are ignored. The estimate is
    /// the mean of the best three per-run VDOTs, or the cold-start VDOT (35) when
    /// no run qualifies.
    #[must_use]
    pub fn calculate_from_recent_runs(runs: &[RunRecord]) -> f64 {
        let mut estimates: Vec<f64> = runs
            .iter()
            .filter(|run| run.duration > 0.0 && run.distance > 0.0)
            .filter_map(|run| Self::calculate_vdot_from_race(run.distance, run.duration).ok())
            .collect();

        if estimates.is_empty() {
            return COLD_START_VDOT;
        }

        estimates.sort_by(|a, b| b.total_cmp(a));
        let best = &estimates[..estimates.len().min(RECENT_RUNS_SAMPLE)];

        let count = best.len() as f64;
        best.iter().sum::<f64>() / count
    }

    /// Training paces for a VDOT, in seconds per mile
    ///
    /// Each pace is the velocity whose oxygen cost equals a fixed fraction of
    /// VDOT, so the zones stay strictly ordered for every VDOT in range.
    #[must_use]
    pub fn get_paces(vdot: f64) -> VdotPaces {
        let vdot = Self::clamp_vdot(vdot);
        let pace_at = |intensity: f64| {
            let velocity = Self::velocity_for_oxygen_cost(intensity * vdot);
            METERS_PER_MILE / velocity * SECONDS_PER_MINUTE
        };

        VdotPaces {
            easy: pace_at(pace_intensity::EASY),
            marathon: pace_at(pace_intensity::MARATHON),
            threshold: pace_at(pace_intensity::THRESHOLD),
            interval: pace_at(pace_intensity::INTERVAL),
            repetition: pace_at(pace_intensity::REPETITION),
        }
    }

    /// Predict the race time for a distance at a VDOT
    ///
    /// Inverts [`Self::calculate_vdot_from_race`] by bisection on the race time,
    /// so predictions and VDOT estimates agree with each other.
    ///
    /// # Returns
    ///
    /// Predicted time in seconds
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if the distance is non-positive or not finite
    pub fn predict_race_time(vdot: f64, distance_miles: f64) -> PlanResult<f64> {
        Self::require_positive("distance", distance_miles)?;
        Ok(Self::predict_seconds(vdot, distance_miles))
    }

    /// Predicted times at the standard race distances
    #[must_use]
    pub fn get_equivalent_times(vdot: f64) -> EquivalentTimes {
        EquivalentTimes {
            mile: Self::predict_seconds(vdot, race_miles::MILE),
            five_k: Self::predict_seconds(vdot, race_miles::FIVE_K),
            ten_k: Self::predict_seconds(vdot, race_miles::TEN_K),
            half_marathon: Self::predict_seconds(vdot, race_miles::HALF_MARATHON),
            marathon: Self::predict_seconds(vdot, race_miles::MARATHON),
        }
    }

    /// Suggest a realistic target VDOT after `weeks` of training
    ///
    /// Gains grow with the square root of the training time and shrink with
    /// experience. The result is above `current` and never above 85.
    #[must_use]
    pub fn suggest_target_vdot(current: f64, experience_level: ExperienceLevel, weeks: u32) -> f64 {
        let rate = match experience_level {
            ExperienceLevel::Beginner => BEGINNER_RATE,
            ExperienceLevel::Intermediate => INTERMEDIATE_RATE,
            ExperienceLevel::Advanced => ADVANCED_RATE,
        };
        let gain = rate * f64::from(weeks.max(1)).sqrt();

        (Self::clamp_vdot(current) + gain).min(MAX_VDOT)
    }

    /// Clamp a VDOT into [20, 85]; NaN falls back to the cold-start VDOT
    #[must_use]
    pub fn clamp_vdot(vdot: f64) -> f64 {
        if vdot.is_nan() {
            COLD_START_VDOT
        } else {
            vdot.clamp(MIN_VDOT, MAX_VDOT)
        }
    }

    /// Oxygen cost (ml/kg/min) of running at `velocity` meters per minute
    #[must_use]
    pub fn oxygen_cost(velocity: f64) -> f64 {
        (VO2_A * velocity).mul_add(velocity, VO2_B.mul_add(velocity, VO2_C))
    }

    /// Fraction of `VO2max` sustainable for an effort lasting `minutes`
    #[must_use]
    pub fn percent_max(minutes: f64) -> f64 {
        PERCENT_MAX_FAST_AMPLITUDE.mul_add(
            (PERCENT_MAX_FAST_RATE * minutes).exp(),
            PERCENT_MAX_SLOW_AMPLITUDE.mul_add(
                (PERCENT_MAX_SLOW_RATE * minutes).exp(),
                PERCENT_MAX_BASE,
            ),
        )
    }

    /// Velocity (m/min) whose oxygen cost equals `vo2`
    ///
    /// Positive root of `0.000104·v² + 0.182258·v - (vo2 + 4.60) = 0`.
    #[must_use]
    pub fn velocity_for_oxygen_cost(vo2: f64) -> f64 {
        let c = VO2_C - vo2;
        let discriminant = VO2_B.mul_add(VO2_B, -(4.0 * VO2_A * c));
        (discriminant.sqrt() - VO2_B) / (2.0 * VO2_A)
    }

    /// Format seconds as `H:MM:SS`, or `M:SS` under an hour
    #[must_use]
    pub fn format_time(seconds: f64) -> String {
        let total_seconds = seconds.max(0.0).round() as u64;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let secs = total_seconds % 60;

        if hours > 0 {
            format!("{hours}:{minutes:02}:{secs:02}")
        } else {
            format!("{minutes}:{secs:02}")
        }
    }

    /// Format a pace in seconds per mile as `M:SS/mi`
    #[must_use]
    pub fn format_pace(seconds_per_mile: f64) -> String {
        if !seconds_per_mile.is_finite() || seconds_per_mile <= 0.0 {
            return "N/A".to_owned();
        }

        let total_seconds = seconds_per_mile.round() as u64;
        format!("{}:{:02}/mi", total_seconds / 60, total_seconds % 60)
    }

    /// Unclamped VDOT for a distance in meters covered in `minutes`
    fn raw_vdot(distance_meters: f64, minutes: f64) -> f64 {
        let velocity = distance_meters / minutes;
        Self::oxygen_cost(velocity) / Self::percent_max(minutes)
    }

    /// Race time in seconds at which the performance rates exactly `vdot`
    fn predict_seconds(vdot: f64, distance_miles: f64) -> f64 {
        let target = Self::clamp_vdot(vdot);
        let distance_meters = distance_miles * METERS_PER_MILE;

        // VDOT falls monotonically as the race time grows, so the root is bracketed
        // by an implausibly fast and an implausibly slow effort.
        let mut fast = distance_meters / MAX_SEARCH_VELOCITY;
        let mut slow = distance_meters / MIN_SEARCH_VELOCITY;
        for _ in 0..BISECTION_ITERATIONS {
            let mid = 0.5 * (fast + slow);
            if Self::raw_vdot(distance_meters, mid) > target {
                fast = mid;
            } else {
                slow = mid;
            }
        }

        0.5 * (fast + slow) * SECONDS_PER_MINUTE
    }

    fn require_positive(field: &'static str, value: f64) -> PlanResult<()> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(PlanError::invalid_input(
                field,
                format!("must be a positive number, got {value}"),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stride_core::errors::ErrorCode;

    fn run(distance: f64, duration: f64) -> RunRecord {
        RunRecord {
            distance,
            duration,
            date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        }
    }

    #[test]
    fn test_5k_in_20_minutes() {
        let vdot = VdotCalculator::calculate_vdot_from_race(3.1, 1200.0).unwrap();
        assert!(vdot > 45.0 && vdot < 55.0, "VDOT {vdot:.2}");
    }

    #[test]
    fn test_marathon_in_3_30() {
        let vdot = VdotCalculator::calculate_vdot_from_race(26.2, 12_600.0).unwrap();
        assert!(vdot > 40.0 && vdot < 55.0, "VDOT {vdot:.2}");
    }

    #[test]
    fn test_invalid_performances_rejected() {
        for (distance, time) in [(0.0, 1200.0), (3.1, 0.0), (-1.0, 100.0), (f64::NAN, 100.0)] {
            let error = VdotCalculator::calculate_vdot_from_race(distance, time).unwrap_err();
            assert_eq!(error.code(), ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_extreme_performances_are_clamped() {
        let slow = VdotCalculator::calculate_vdot_from_race(0.5, 36_000.0).unwrap();
        let fast = VdotCalculator::calculate_vdot_from_race(26.2, 3_600.0).unwrap();
        assert!((slow - MIN_VDOT).abs() < f64::EPSILON);
        assert!((fast - MAX_VDOT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_threshold_pace_matches_published_table() {
        // Daniels' tables list 6:51/mi threshold pace for VDOT 50
        let paces = VdotCalculator::get_paces(50.0);
        assert!((paces.threshold - 411.0).abs() < 6.0, "{}", paces.threshold);
    }

    #[test]
    fn test_prediction_inverts_race_formula() {
        let vdot = VdotCalculator::calculate_vdot_from_race(6.2, 2_700.0).unwrap();
        let predicted = VdotCalculator::predict_race_time(vdot, 6.2).unwrap();
        assert!((predicted - 2_700.0).abs() < 0.5, "{predicted}");
    }

    #[test]
    fn test_recent_runs_uses_best_three() {
        let runs = [
            run(3.1, 1200.0),
            run(3.1, 1260.0),
            run(3.1, 1320.0),
            run(3.1, 2400.0),
            run(0.0, 600.0),
        ];
        let expected = [1200.0, 1260.0, 1320.0]
            .iter()
            .map(|t| VdotCalculator::calculate_vdot_from_race(3.1, *t).unwrap())
            .sum::<f64>()
            / 3.0;

        let estimate = VdotCalculator::calculate_from_recent_runs(&runs);
        assert!((estimate - expected).abs() < 1e-9);
    }

    #[test]
    fn test_no_qualifying_runs_is_cold_start() {
        assert!((VdotCalculator::calculate_from_recent_runs(&[]) - 35.0).abs() < f64::EPSILON);
        let invalid = [run(0.0, 1200.0), run(3.0, 0.0)];
        assert!((VdotCalculator::calculate_from_recent_runs(&invalid) - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_handles_nan() {
        assert!((VdotCalculator::clamp_vdot(f64::NAN) - COLD_START_VDOT).abs() < f64::EPSILON);
        assert!((VdotCalculator::clamp_vdot(120.0) - MAX_VDOT).abs() < f64::EPSILON);
        assert!((VdotCalculator::clamp_vdot(3.0) - MIN_VDOT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(VdotCalculator::format_time(1171.0), "19:31");
        assert_eq!(VdotCalculator::format_time(11_280.0), "3:08:00");
        assert_eq!(VdotCalculator::format_pace(411.4), "6:51/mi");
        assert_eq!(VdotCalculator::format_pace(359.6), "6:00/mi");
        assert_eq!(VdotCalculator::format_pace(0.0), "N/A");
    }
}

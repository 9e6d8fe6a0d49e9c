// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for VDOT bounds, plan limits and periodization defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Constants module
//!
//! Constants are grouped by domain. The periodization and selection values are
//! sports-science judgment calls: they are kept here, away from control flow, and
//! only reach the algorithms through the planner configuration structs.

/// Unit conversion constants
pub mod units;

/// VDOT range and fitness defaults
pub mod vdot {
    /// Lowest VDOT the engine reports
    pub const MIN_VDOT: f64 = 20.0;
    /// Highest VDOT the engine reports
    pub const MAX_VDOT: f64 = 85.0;
    /// VDOT assumed when a user has no qualifying run history
    pub const COLD_START_VDOT: f64 = 35.0;
    /// Number of best runs averaged when estimating VDOT from history
    pub const RECENT_RUNS_SAMPLE: usize = 3;
    /// VDOT at which the weekly mileage table applies unscaled
    pub const MILEAGE_REFERENCE_VDOT: f64 = 50.0;
    /// Lower bound of the VDOT mileage scale
    pub const MILEAGE_SCALE_MIN: f64 = 0.7;
    /// Upper bound of the VDOT mileage scale
    pub const MILEAGE_SCALE_MAX: f64 = 1.3;
}

/// Jack Daniels and Jimmy Gilbert oxygen-cost and drop-dead curve coefficients
///
/// Reference: Daniels, J. & Gilbert, J. (1979). *Oxygen Power: Performance Tables
/// for Distance Runners.*
pub mod daniels {
    /// VO2 cost: coefficient for velocity squared (m/min)
    pub const VO2_A: f64 = 0.000_104;
    /// VO2 cost: coefficient for velocity (m/min)
    pub const VO2_B: f64 = 0.182_258;
    /// VO2 cost: constant term
    pub const VO2_C: f64 = -4.60;
    /// Sustainable fraction of VO2max: asymptote for very long efforts
    pub const PERCENT_MAX_BASE: f64 = 0.8;
    /// Sustainable fraction: slow decay amplitude
    pub const PERCENT_MAX_SLOW_AMPLITUDE: f64 = 0.189_439_3;
    /// Sustainable fraction: slow decay rate (per minute)
    pub const PERCENT_MAX_SLOW_RATE: f64 = -0.012_778;
    /// Sustainable fraction: fast decay amplitude
    pub const PERCENT_MAX_FAST_AMPLITUDE: f64 = 0.298_955_8;
    /// Sustainable fraction: fast decay rate (per minute)
    pub const PERCENT_MAX_FAST_RATE: f64 = -0.193_260_5;
}

/// Training pace intensities as fractions of VDOT
///
/// Each pace is the velocity whose oxygen cost equals the fraction of VDOT.
/// Reference: Daniels, J. (2013). *Daniels' Running Formula* (3rd ed.), ch. 4.
pub mod pace_intensity {
    /// Easy / long run effort
    pub const EASY: f64 = 0.70;
    /// Marathon race effort
    pub const MARATHON: f64 = 0.82;
    /// Lactate threshold (comfortably hard, ~1 hour race effort)
    pub const THRESHOLD: f64 = 0.88;
    /// VO2max interval effort
    pub const INTERVAL: f64 = 0.98;
    /// Repetition (speed and economy) effort
    pub const REPETITION: f64 = 1.07;
}

/// Target VDOT improvement rates (VDOT points per square-root week)
pub mod improvement {
    /// Beginners adapt fastest
    pub const BEGINNER_RATE: f64 = 1.0;
    /// Intermediate runners
    pub const INTERMEDIATE_RATE: f64 = 0.7;
    /// Advanced runners are closest to their ceiling
    pub const ADVANCED_RATE: f64 = 0.4;
}

/// Structural limits on plans and requests
pub mod plan_limits {
    /// Fewest runs per week a plan supports
    pub const MIN_WEEKLY_FREQUENCY: u8 = 2;
    /// Most runs per week a plan supports
    pub const MAX_WEEKLY_FREQUENCY: u8 = 7;
    /// Shortest plan that still has build, peak and taper weeks
    pub const MIN_TOTAL_WEEKS: u32 = 4;
    /// Longest plan the engine produces
    pub const MAX_TOTAL_WEEKS: u32 = 52;
    /// Lower clamp for plans sized from a target date
    pub const MIN_TARGET_WEEKS: u32 = 8;
    /// Upper clamp for plans sized from a target date
    pub const MAX_TARGET_WEEKS: u32 = 24;
    /// Shortest workout the engine prescribes, in miles
    pub const MIN_WORKOUT_MILES: f64 = 0.1;
    /// Weeks covered by a scheduled training block
    pub const BLOCK_WEEKS: u32 = 2;
}

/// Periodization phase boundaries and volume multipliers
pub mod periodization {
    /// Build phase covers this share of the plan (percent of weeks, floored)
    pub const BUILD_PHASE_PERCENT: u32 = 70;
    /// Build and peak phases together cover this share (percent of weeks, floored)
    pub const PEAK_PHASE_END_PERCENT: u32 = 90;
    /// Volume multiplier on the first build week
    pub const BUILD_START_FACTOR: f64 = 0.7;
    /// Volume multiplier on the first peak week
    pub const PEAK_START_FACTOR: f64 = 0.95;
    /// Full training volume
    pub const FULL_VOLUME_FACTOR: f64 = 1.0;
    /// Volume multiplier on race week
    pub const TAPER_END_FACTOR: f64 = 0.6;
    /// Weekly volume multiplier applied when the runner reports past injuries
    pub const INJURY_MILEAGE_FACTOR: f64 = 0.9;
}

/// Quality-workout selection thresholds (fraction of the plan completed)
pub mod selection {
    /// Before this phase point only tempo runs are prescribed
    pub const TEMPO_ONLY_UNTIL: f64 = 0.3;
    /// From this phase point quality work is interval-biased
    pub const INTERVAL_BIAS_FROM: f64 = 0.8;
    /// Every n-th week swaps the fourth run for a recovery run
    pub const RECOVERY_WEEK_INTERVAL: u32 = 3;
}

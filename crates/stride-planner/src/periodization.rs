// ABOUTME: Periodization engine for plan length, weekly volume and phase progression
// ABOUTME: Build, peak and taper phases with linear volume multipliers per week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Periodization
//!
//! A plan is split into three consecutive phases:
//!
//! - **Build** (first 70% of weeks): volume ramps linearly from 70% to 100%
//! - **Peak** (up to 90% of weeks): volume holds between 95% and 100%
//! - **Taper** (the remainder): volume decays linearly to 60% on race week
//!
//! Phase boundaries use integer floors, so every week belongs to exactly one
//! phase for every plan length.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stride_core::constants::periodization::FULL_VOLUME_FACTOR;
use stride_core::constants::units::DAYS_PER_WEEK;
use stride_core::constants::vdot::{
    MILEAGE_REFERENCE_VDOT, MILEAGE_SCALE_MAX, MILEAGE_SCALE_MIN,
};
use stride_core::models::{ExperienceLevel, RaceDistance, TrainingPhase};

use crate::config::PeriodizationConfig;

/// Number of weeks in each phase of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseLengths {
    /// Build weeks
    pub build: u32,
    /// Peak weeks
    pub peak: u32,
    /// Taper weeks
    pub taper: u32,
}

impl PhaseLengths {
    /// Total plan length
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.build + self.peak + self.taper
    }

    /// Last week of the peak phase
    #[must_use]
    pub const fn peak_end(&self) -> u32 {
        self.build + self.peak
    }
}

/// Plan length, baseline volume and per-week volume multipliers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodizationEngine {
    config: PeriodizationConfig,
}

impl PeriodizationEngine {
    /// Create an engine with custom phase boundaries
    #[must_use]
    pub const fn with_config(config: PeriodizationConfig) -> Self {
        Self { config }
    }

    /// Phase configuration in use
    #[must_use]
    pub const fn config(&self) -> &PeriodizationConfig {
        &self.config
    }

    /// Default plan length in weeks when no target date is given
    #[must_use]
    pub const fn get_base_plan_duration(race: RaceDistance, level: ExperienceLevel) -> u32 {
        let [beginner, intermediate, advanced] = match race {
            RaceDistance::FiveK => [8, 10, 12],
            RaceDistance::TenK => [10, 12, 14],
            RaceDistance::HalfMarathon => [12, 16, 18],
            RaceDistance::Marathon => [16, 20, 24],
        };
        match level {
            ExperienceLevel::Beginner => beginner,
            ExperienceLevel::Intermediate => intermediate,
            ExperienceLevel::Advanced => advanced,
        }
    }

    /// Whole weeks from `today` until `target_date`, rounded up
    ///
    /// Negative when the target date has passed.
    #[must_use]
    pub fn weeks_until(target_date: NaiveDate, today: NaiveDate) -> i64 {
        let days = (target_date - today).num_days();
        (days + DAYS_PER_WEEK - 1).div_euclid(DAYS_PER_WEEK)
    }

    /// Plan length for a target date, clamped to the configured week range
    #[must_use]
    pub fn calculate_weeks_to_target(&self, target_date: NaiveDate, today: NaiveDate) -> u32 {
        let weeks = Self::weeks_until(target_date, today).clamp(
            i64::from(self.config.min_target_weeks),
            i64::from(self.config.max_target_weeks),
        );
        u32::try_from(weeks).unwrap_or(self.config.min_target_weeks)
    }

    /// Baseline weekly mileage for a race and level, scaled by fitness
    ///
    /// The table applies as-is at VDOT 50; fitter runners get up to 30% more
    /// and less fit runners up to 30% less.
    #[must_use]
    pub fn estimate_weekly_mileage(race: RaceDistance, level: ExperienceLevel, vdot: f64) -> f64 {
        let [beginner, intermediate, advanced] = match race {
            RaceDistance::FiveK => [15.0, 25.0, 35.0],
            RaceDistance::TenK => [20.0, 30.0, 40.0],
            RaceDistance::HalfMarathon => [25.0, 35.0, 45.0],
            RaceDistance::Marathon => [30.0, 40.0, 55.0],
        };
        let base = match level {
            ExperienceLevel::Beginner => beginner,
            ExperienceLevel::Intermediate => intermediate,
            ExperienceLevel::Advanced => advanced,
        };

        let scale = if vdot.is_finite() {
            (vdot / MILEAGE_REFERENCE_VDOT).clamp(MILEAGE_SCALE_MIN, MILEAGE_SCALE_MAX)
        } else {
            FULL_VOLUME_FACTOR
        };
        base * scale
    }

    /// Weeks in each phase for a plan of `total_weeks`
    #[must_use]
    pub fn phase_lengths(&self, total_weeks: u32) -> PhaseLengths {
        let total = total_weeks.max(1);
        let build = (total * self.config.build_phase_percent / 100).clamp(1, total);
        let peak_end = (total * self.config.peak_phase_end_percent / 100).clamp(build, total);

        PhaseLengths {
            build,
            peak: peak_end - build,
            taper: total - peak_end,
        }
    }

    /// Phase a week belongs to; weeks outside the plan are clamped
    #[must_use]
    pub fn phase_for_week(&self, week: u32, total_weeks: u32) -> TrainingPhase {
        let lengths = self.phase_lengths(total_weeks);
        let week = week.clamp(1, lengths.total());

        if week <= lengths.build {
            TrainingPhase::Build
        } else if week <= lengths.peak_end() {
            TrainingPhase::Peak
        } else {
            TrainingPhase::Taper
        }
    }

    /// Volume multiplier for `week` of a `total_weeks` plan
    #[must_use]
    pub fn get_progression_factor(&self, week: u32, total_weeks: u32) -> f64 {
        let lengths = self.phase_lengths(total_weeks);
        let week = week.clamp(1, lengths.total());

        if week <= lengths.build {
            let step = f64::from(week - 1) / f64::from(lengths.build.saturating_sub(1).max(1));
            Self::ramp(self.config.build_start_factor, FULL_VOLUME_FACTOR, step)
        } else if week <= lengths.peak_end() {
            let step = f64::from(week - lengths.build - 1)
                / f64::from(lengths.peak.saturating_sub(1).max(1));
            Self::ramp(self.config.peak_start_factor, FULL_VOLUME_FACTOR, step)
        } else {
            let step = f64::from(week - lengths.peak_end()) / f64::from(lengths.taper);
            Self::ramp(FULL_VOLUME_FACTOR, self.config.taper_end_factor, step)
        }
    }

    fn ramp(from: f64, to: f64, step: f64) -> f64 {
        (to - from).mul_add(step, from)
    }
}

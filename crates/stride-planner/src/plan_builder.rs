// ABOUTME: Plan orchestration composing VDOT paces, periodization and workout selection
// ABOUTME: Builds training plans, weekly workouts, scheduled 14-day blocks and plan replacements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! # Plan Builder
//!
//! Orchestrates the engine:
//!
//! 1. [`PlanBuilder::generate_plan_at`] validates a [`PlanGenerationRequest`],
//!    sizes the plan and derives training paces.
//! 2. [`PlanBuilder::generate_week_workouts`] materializes one week of workouts
//!    from the selected templates and the week's volume multiplier.
//! 3. [`PlanBuilder::generate_14_day_block_from`] generates the first two weeks
//!    and places them on calendar dates.
//!
//! Nothing here touches storage. Plans and workouts come back with `id = None`
//! and are persisted by the caller.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use stride_core::constants::plan_limits::{
    BLOCK_WEEKS, MAX_TOTAL_WEEKS, MAX_WEEKLY_FREQUENCY, MIN_TOTAL_WEEKS, MIN_WEEKLY_FREQUENCY,
    MIN_WORKOUT_MILES,
};
use stride_core::constants::units::{DAYS_PER_WEEK, SECONDS_PER_MINUTE};
use stride_core::errors::{PlanError, PlanResult};
use stride_core::models::{
    PaceType, PlanGenerationRequest, RaceDistance, TrainingBlock, TrainingPhase, TrainingPlan,
    VdotPaces, Workout, WorkoutType,
};
use tracing::{debug, info};

use crate::algorithms::VdotCalculator;
use crate::config::PlannerConfig;
use crate::periodization::PeriodizationEngine;
use crate::scheduling::WeekdayRotation;
use crate::selection::TemplateSelector;

/// A replacement plan together with the plan it supersedes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSupersession {
    /// Previous plan, deactivated
    pub previous: TrainingPlan,
    /// Replacement plan, active
    pub plan: TrainingPlan,
}

/// Training-plan orchestrator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanBuilder {
    periodization: PeriodizationEngine,
    selector: TemplateSelector,
}

impl PlanBuilder {
    /// Create a builder with custom planner configuration
    ///
    /// The configuration is used as given; call [`PlannerConfig::validate`]
    /// first when it comes from an untrusted source.
    #[must_use]
    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            periodization: PeriodizationEngine::with_config(config.periodization),
            selector: TemplateSelector::with_config(config.selection),
        }
    }

    /// Periodization engine in use
    #[must_use]
    pub const fn periodization(&self) -> &PeriodizationEngine {
        &self.periodization
    }

    /// Generate a plan starting now
    ///
    /// # Errors
    ///
    /// See [`Self::generate_plan_at`]
    pub fn generate_plan(&self, request: &PlanGenerationRequest) -> PlanResult<TrainingPlan> {
        self.generate_plan_at(request, Utc::now())
    }

    /// Generate a plan as of `now`
    ///
    /// # Errors
    ///
    /// - `PlanError::InvalidInput` for a malformed request or a target date not after today
    /// - `PlanError::DegenerateSchedule` when the plan would be shorter than four weeks
    pub fn generate_plan_at(
        &self,
        request: &PlanGenerationRequest,
        now: DateTime<Utc>,
    ) -> PlanResult<TrainingPlan> {
        Self::validate_request(request)?;
        let today = now.date_naive();
        let total_weeks = self.total_weeks_for(request, today)?;

        let vdot = VdotCalculator::clamp_vdot(request.current_vdot);
        let paces = VdotCalculator::get_paces(vdot);
        Self::validate_duration_cap(request, &paces)?;
        let plan = TrainingPlan {
            id: None,
            user_id: request.user_id.clone(),
            vdot,
            weekly_frequency: request.weekly_frequency,
            target_race: request.target_race,
            target_date: request.target_date,
            experience_level: request.experience_level,
            current_week: 1,
            total_weeks,
            paces,
            created_at: now,
            updated_at: now,
            is_active: true,
        };

        info!(
            user_id = %plan.user_id,
            race = %plan.target_race,
            total_weeks,
            vdot = plan.vdot,
            "Generated training plan"
        );
        Ok(plan)
    }

    /// Plan length for a request, from its target date or the base duration
    ///
    /// # Errors
    ///
    /// - `PlanError::InvalidInput` if the target date is not after `today` or the
    ///   plan would exceed 52 weeks
    /// - `PlanError::DegenerateSchedule` if the plan would be shorter than four weeks
    pub fn total_weeks_for(&self, request: &PlanGenerationRequest, today: NaiveDate) -> PlanResult<u32> {
        let total_weeks = match request.target_date {
            Some(target_date) => {
                if target_date <= today {
                    return Err(PlanError::invalid_input(
                        "target_date",
                        format!("{target_date} is not after {today}"),
                    ));
                }
                self.periodization
                    .calculate_weeks_to_target(target_date, today)
            }
            None => PeriodizationEngine::get_base_plan_duration(
                request.target_race,
                request.experience_level,
            ),
        };

        if total_weeks < MIN_TOTAL_WEEKS {
            return Err(PlanError::degenerate_schedule(total_weeks, MIN_TOTAL_WEEKS));
        }
        if total_weeks > MAX_TOTAL_WEEKS {
            return Err(PlanError::invalid_input(
                "target_date",
                format!("{total_weeks} weeks exceeds the {MAX_TOTAL_WEEKS}-week maximum"),
            ));
        }
        Ok(total_weeks)
    }

    /// Materialize the workouts for one week of a plan
    ///
    /// Returns exactly `plan.weekly_frequency` workouts with `day = 1..=frequency`.
    /// The selected templates' ratios are normalized, so without a duration cap
    /// the distances add up to [`Self::weekly_mileage`] within rounding.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if `week` is outside the plan or the
    /// request carries invalid volume preferences
    pub fn generate_week_workouts(
        &self,
        plan: &TrainingPlan,
        week: u32,
        request: &PlanGenerationRequest,
    ) -> PlanResult<Vec<Workout>> {
        if !plan.contains_week(week) {
            return Err(PlanError::invalid_input(
                "week",
                format!("must be between 1 and {}, got {week}", plan.total_weeks),
            ));
        }
        Self::validate_volume_inputs(request)?;
        Self::validate_duration_cap(request, &plan.paces)?;

        let templates = self.selector.select(
            plan.target_race,
            plan.weekly_frequency,
            week,
            plan.total_weeks,
        )?;
        let weekly_mileage = self.weekly_mileage(plan, week, request);
        let ratio_total: f64 = templates.iter().map(|template| template.distance_ratio).sum();
        let phase = self.periodization.phase_for_week(week, plan.total_weeks);
        let duration_cap = request
            .preferences
            .as_ref()
            .and_then(|preferences| preferences.max_workout_duration);

        let workouts: Vec<Workout> = templates
            .iter()
            .zip(1_u32..)
            .map(|(template, day)| {
                let target_pace = plan.paces.get(template.pace_type);
                let (distance, duration) = Self::distance_and_duration(
                    weekly_mileage * template.distance_ratio / ratio_total,
                    target_pace,
                    duration_cap,
                );

                Workout {
                    id: None,
                    plan_id: plan.id,
                    user_id: plan.user_id.clone(),
                    week,
                    day,
                    workout_type: template.workout_type,
                    distance,
                    duration,
                    target_pace,
                    description: describe_workout(
                        template.workout_type,
                        distance,
                        template.pace_type,
                        target_pace,
                        plan.target_race,
                        phase,
                    ),
                    completed: false,
                    scheduled_date: None,
                }
            })
            .collect();

        debug!(
            user_id = %plan.user_id,
            week,
            %phase,
            weekly_mileage,
            workouts = workouts.len(),
            quality = workouts
                .iter()
                .filter(|workout| workout.workout_type.is_quality())
                .count(),
            "Materialized training week"
        );
        Ok(workouts)
    }

    /// Weekly volume for a week of the plan, in miles
    #[must_use]
    pub fn weekly_mileage(
        &self,
        plan: &TrainingPlan,
        week: u32,
        request: &PlanGenerationRequest,
    ) -> f64 {
        let mut baseline = request.weekly_mileage.unwrap_or_else(|| {
            PeriodizationEngine::estimate_weekly_mileage(
                plan.target_race,
                plan.experience_level,
                plan.vdot,
            )
        });
        if !request.injury_history.is_empty() {
            baseline *= self.periodization.config().injury_mileage_factor;
        }
        baseline * self
            .periodization
            .get_progression_factor(week, plan.total_weeks)
    }

    /// Generate a scheduled 14-day block starting now
    ///
    /// # Errors
    ///
    /// See [`Self::generate_14_day_block_from`]
    pub fn generate_14_day_block(
        &self,
        request: &PlanGenerationRequest,
    ) -> PlanResult<TrainingBlock> {
        self.generate_14_day_block_from(request, Utc::now())
    }

    /// Generate a fresh plan and schedule its first two weeks from `now`'s date
    ///
    /// # Errors
    ///
    /// Everything [`Self::generate_plan_at`] returns, plus `PlanError::InvalidInput`
    /// when rest days leave fewer training days than the weekly frequency
    pub fn generate_14_day_block_from(
        &self,
        request: &PlanGenerationRequest,
        now: DateTime<Utc>,
    ) -> PlanResult<TrainingBlock> {
        let plan = self.generate_plan_at(request, now)?;
        let workouts = self.schedule_block(&plan, request, now.date_naive())?;
        Ok(TrainingBlock { plan, workouts })
    }

    /// Generate and date the first two weeks of `plan`, ordered by date
    ///
    /// Week `n` occupies the seven days starting `7 * (n - 1)` days after `start`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` when rest days leave too few training days
    pub fn schedule_block(
        &self,
        plan: &TrainingPlan,
        request: &PlanGenerationRequest,
        start: NaiveDate,
    ) -> PlanResult<Vec<Workout>> {
        let preferences = request.preferences_or_default();
        let training_days = WeekdayRotation::new(&preferences.preferred_rest_days)?
            .training_days(plan.weekly_frequency, preferences.avoid_back_to_back)?;

        let mut block = Vec::new();
        for week in (1..=BLOCK_WEEKS).filter(|week| plan.contains_week(*week)) {
            let offset = u64::from(week - 1) * DAYS_PER_WEEK.unsigned_abs();
            let week_start = start + Days::new(offset);

            for mut workout in self.generate_week_workouts(plan, week, request)? {
                let slot = usize::try_from(workout.day - 1).unwrap_or(usize::MAX);
                let weekday = training_days.get(slot).copied().ok_or_else(|| {
                    PlanError::invalid_input(
                        "preferred_rest_days",
                        format!("no training day left for workout {}", workout.day),
                    )
                })?;
                workout.scheduled_date = Some(WeekdayRotation::date_in_week(week_start, weekday));
                block.push(workout);
            }
        }

        block.sort_by_key(|workout| workout.scheduled_date);
        Ok(block)
    }

    /// Build the plan replacing `previous` after a VDOT or frequency change
    ///
    /// The replacement keeps the runner's progress (`current_week`, clamped to
    /// the new plan length); the previous plan comes back deactivated.
    ///
    /// # Errors
    ///
    /// Everything [`Self::generate_plan_at`] returns, plus `PlanError::InvalidInput`
    /// if the request belongs to a different user
    pub fn supersede_plan(
        &self,
        previous: TrainingPlan,
        request: &PlanGenerationRequest,
        now: DateTime<Utc>,
    ) -> PlanResult<PlanSupersession> {
        if previous.user_id != request.user_id {
            return Err(PlanError::invalid_input(
                "user_id",
                "replacement request belongs to a different user",
            ));
        }

        let mut plan = self.generate_plan_at(request, now)?;
        plan.current_week = previous.current_week.clamp(1, plan.total_weeks);

        info!(
            user_id = %plan.user_id,
            previous_vdot = previous.vdot,
            vdot = plan.vdot,
            current_week = plan.current_week,
            "Superseding active training plan"
        );
        Ok(PlanSupersession {
            previous: previous.deactivated(now),
            plan,
        })
    }

    /// Generate plans for many requests in parallel, preserving input order
    #[must_use]
    pub fn generate_batch(
        &self,
        requests: &[PlanGenerationRequest],
        now: DateTime<Utc>,
    ) -> Vec<PlanResult<TrainingPlan>> {
        requests
            .par_iter()
            .map(|request| self.generate_plan_at(request, now))
            .collect()
    }

    fn validate_request(request: &PlanGenerationRequest) -> PlanResult<()> {
        if request.user_id.trim().is_empty() {
            return Err(PlanError::invalid_input("user_id", "must not be empty"));
        }
        if !(MIN_WEEKLY_FREQUENCY..=MAX_WEEKLY_FREQUENCY).contains(&request.weekly_frequency) {
            return Err(PlanError::invalid_input(
                "weekly_frequency",
                format!(
                    "must be between {MIN_WEEKLY_FREQUENCY} and {MAX_WEEKLY_FREQUENCY}, got {}",
                    request.weekly_frequency
                ),
            ));
        }
        if !request.current_vdot.is_finite() || request.current_vdot <= 0.0 {
            return Err(PlanError::invalid_input(
                "current_vdot",
                format!("must be a positive number, got {}", request.current_vdot),
            ));
        }
        Self::validate_volume_inputs(request)?;

        if let Some(preferences) = &request.preferences {
            WeekdayRotation::new(&preferences.preferred_rest_days)?;
        }
        Ok(())
    }

    fn validate_volume_inputs(request: &PlanGenerationRequest) -> PlanResult<()> {
        if let Some(mileage) = request.weekly_mileage {
            if !mileage.is_finite() || mileage <= 0.0 {
                return Err(PlanError::invalid_input(
                    "weekly_mileage",
                    format!("must be a positive number, got {mileage}"),
                ));
            }
        }
        if let Some(cap) = request
            .preferences
            .as_ref()
            .and_then(|preferences| preferences.max_workout_duration)
        {
            if !cap.is_finite() || cap <= 0.0 {
                return Err(PlanError::invalid_input(
                    "max_workout_duration",
                    format!("must be a positive number of minutes, got {cap}"),
                ));
            }
        }
        Ok(())
    }

    /// A duration cap must leave room for the shortest workout at the slowest (easy) pace
    fn validate_duration_cap(request: &PlanGenerationRequest, paces: &VdotPaces) -> PlanResult<()> {
        let Some(cap) = request
            .preferences
            .as_ref()
            .and_then(|preferences| preferences.max_workout_duration)
        else {
            return Ok(());
        };

        let shortest = MIN_WORKOUT_MILES * paces.easy / SECONDS_PER_MINUTE;
        if cap < shortest {
            return Err(PlanError::invalid_input(
                "max_workout_duration",
                format!(
                    "{cap} minutes is shorter than {MIN_WORKOUT_MILES} mi at easy pace ({shortest:.1} minutes)"
                ),
            ));
        }
        Ok(())
    }

    /// Rounded distance (miles) and duration (minutes), honoring a duration cap
    fn distance_and_duration(miles: f64, pace: f64, duration_cap: Option<f64>) -> (f64, f64) {
        let distance = round_tenth(miles).max(MIN_WORKOUT_MILES);
        let duration = round_tenth(distance * pace / SECONDS_PER_MINUTE);

        match duration_cap {
            Some(cap) if duration > cap => {
                let capped_distance =
                    floor_tenth(cap * SECONDS_PER_MINUTE / pace).max(MIN_WORKOUT_MILES);
                let capped_duration =
                    round_tenth(capped_distance * pace / SECONDS_PER_MINUTE).min(cap);
                (capped_distance, capped_duration)
            }
            _ => (distance, duration),
        }
    }
}

/// Human-readable workout summary, e.g.
/// `Tempo run: 4.2 mi at 6:51/mi (threshold pace), 10K build phase`
#[must_use]
pub fn describe_workout(
    workout_type: WorkoutType,
    distance: f64,
    pace_type: PaceType,
    pace: f64,
    race: RaceDistance,
    phase: TrainingPhase,
) -> String {
    format!(
        "{}: {distance:.1} mi at {} ({pace_type} pace), {} {phase} phase",
        workout_type.label(),
        VdotCalculator::format_pace(pace),
        race.display_name()
    )
}

/// Round to one decimal place
#[must_use]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn floor_tenth(value: f64) -> f64 {
    (value * 10.0).floor() / 10.0
}

// ABOUTME: Re-pacing of incomplete workouts after a VDOT change
// ABOUTME: Maps workout types to pace zones and recomputes duration and description
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use stride_core::constants::units::SECONDS_PER_MINUTE;
use stride_core::models::{TrainingPlan, Workout};

use crate::periodization::PeriodizationEngine;
use crate::plan_builder::{describe_workout, round_tenth};

/// Applies a plan's training paces to scheduled workouts
///
/// Completed workouts are history and race workouts run at race effort, so
/// both are returned untouched. Distances never change.
pub struct PaceUpdater<'a> {
    plan: &'a TrainingPlan,
    periodization: &'a PeriodizationEngine,
}

impl<'a> PaceUpdater<'a> {
    /// Re-pace against `plan`'s paces, race and phase layout
    #[must_use]
    pub const fn for_plan(plan: &'a TrainingPlan, periodization: &'a PeriodizationEngine) -> Self {
        Self {
            plan,
            periodization,
        }
    }

    /// Copy of `workouts` with every incomplete, non-race workout re-paced
    #[must_use]
    pub fn apply(&self, workouts: &[Workout]) -> Vec<Workout> {
        workouts
            .iter()
            .map(|workout| self.repace(workout).unwrap_or_else(|| workout.clone()))
            .collect()
    }

    /// Only the workouts whose target pace actually changes
    #[must_use]
    pub fn changed(&self, workouts: &[Workout]) -> Vec<Workout> {
        workouts
            .iter()
            .filter_map(|workout| {
                self.repace(workout).filter(|updated| {
                    (updated.target_pace - workout.target_pace).abs() > f64::EPSILON
                })
            })
            .collect()
    }

    fn repace(&self, workout: &Workout) -> Option<Workout> {
        if workout.completed {
            return None;
        }
        let pace_type = workout.workout_type.pace_type()?;
        let target_pace = self.plan.paces.get(pace_type);
        let phase = self
            .periodization
            .phase_for_week(workout.week, self.plan.total_weeks);

        let mut updated = workout.clone();
        updated.target_pace = target_pace;
        updated.duration = round_tenth(workout.distance * target_pace / SECONDS_PER_MINUTE);
        updated.description = describe_workout(
            workout.workout_type,
            workout.distance,
            pace_type,
            target_pace,
            self.plan.target_race,
            phase,
        );
        Some(updated)
    }
}

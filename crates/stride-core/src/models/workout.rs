// ABOUTME: Workout archetypes and materialized workouts
// ABOUTME: Static per-race templates and the workout rows handed to persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::paces::PaceType;

/// Workout categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Conversational aerobic run
    Easy,
    /// Weekly long run
    Long,
    /// Sustained threshold run
    Tempo,
    /// VO2max repeats
    Intervals,
    /// Very easy short run after hard days
    Recovery,
    /// Goal race
    Race,
}

impl WorkoutType {
    /// Pace zone used when re-pacing an incomplete workout after a VDOT change
    ///
    /// Race workouts keep their prescribed pace and return `None`.
    #[must_use]
    pub const fn pace_type(self) -> Option<PaceType> {
        match self {
            Self::Easy | Self::Recovery | Self::Long => Some(PaceType::Easy),
            Self::Tempo => Some(PaceType::Threshold),
            Self::Intervals => Some(PaceType::Interval),
            Self::Race => None,
        }
    }

    /// Whether this is a quality (hard) session
    #[must_use]
    pub const fn is_quality(self) -> bool {
        matches!(self, Self::Tempo | Self::Intervals)
    }

    /// Label used in workout descriptions
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy run",
            Self::Long => "Long run",
            Self::Tempo => "Tempo run",
            Self::Intervals => "Interval session",
            Self::Recovery => "Recovery run",
            Self::Race => "Race",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static workout archetype for one race distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutTemplate {
    /// Workout category
    pub workout_type: WorkoutType,
    /// Relative share of the weekly mileage, in (0, 1]
    pub distance_ratio: f64,
    /// Pace zone the workout is run at
    pub pace_type: PaceType,
    /// Perceived effort, 1-10
    pub effort_level: u8,
    /// Easy days recommended afterwards
    pub recovery_days: u8,
}

/// A scheduled (or schedulable) workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Durable id, assigned by persistence
    pub id: Option<Uuid>,
    /// Owning plan id, copied from the plan
    pub plan_id: Option<Uuid>,
    /// Owning user
    pub user_id: String,
    /// Plan week, 1-based
    pub week: u32,
    /// Position within the week, 1-based
    pub day: u32,
    /// Workout category
    pub workout_type: WorkoutType,
    /// Distance in miles
    pub distance: f64,
    /// Duration in minutes
    pub duration: f64,
    /// Target pace in seconds per mile
    pub target_pace: f64,
    /// Human-readable prescription
    pub description: String,
    /// Written only by the run-logging collaborator
    pub completed: bool,
    /// Calendar date once scheduled
    pub scheduled_date: Option<NaiveDate>,
}

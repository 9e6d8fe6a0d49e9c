// ABOUTME: Training plan value objects and periodization phases
// ABOUTME: Immutable plans that are superseded rather than edited in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::paces::VdotPaces;
use super::race::{ExperienceLevel, RaceDistance};
use super::workout::Workout;

/// Periodization phase of a plan week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Progressive volume increase
    Build,
    /// Highest sustained volume
    Peak,
    /// Volume reduction before the race
    Taper,
}

impl fmt::Display for TrainingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => write!(f, "build"),
            Self::Peak => write!(f, "peak"),
            Self::Taper => write!(f, "taper"),
        }
    }
}

/// A race-specific periodized training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Durable id, assigned by persistence
    pub id: Option<Uuid>,
    /// Owning user
    pub user_id: String,
    /// VDOT the paces were derived from, within [20, 85]
    pub vdot: f64,
    /// Runs per week, within [2, 7]
    pub weekly_frequency: u8,
    /// Goal race
    pub target_race: RaceDistance,
    /// Goal race date, when known
    pub target_date: Option<NaiveDate>,
    /// Experience level the volume was sized for
    pub experience_level: ExperienceLevel,
    /// Week the runner is currently in, 1-based
    pub current_week: u32,
    /// Plan length in weeks, within [4, 52]
    pub total_weeks: u32,
    /// Training paces for this VDOT
    pub paces: VdotPaces,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last lifecycle change
    pub updated_at: DateTime<Utc>,
    /// Whether this is the user's active plan
    pub is_active: bool,
}

impl TrainingPlan {
    /// Copy of this plan carrying a durable id
    #[must_use]
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Copy of this plan marked inactive at `at`
    #[must_use]
    pub fn deactivated(mut self, at: DateTime<Utc>) -> Self {
        self.is_active = false;
        self.updated_at = at;
        self
    }

    /// Whether `week` is a valid week of this plan
    #[must_use]
    pub const fn contains_week(&self, week: u32) -> bool {
        week >= 1 && week <= self.total_weeks
    }
}

/// A freshly generated plan with its first scheduled workouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingBlock {
    /// The plan the workouts belong to
    pub plan: TrainingPlan,
    /// Workouts ordered by scheduled date
    pub workouts: Vec<Workout>,
}

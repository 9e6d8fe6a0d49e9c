// ABOUTME: Value objects for the training-plan engine
// ABOUTME: Race distances, pace zones, plans, workouts, and generation requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Value objects exchanged between the engine and its collaborators.
//!
//! All types are plain data: they serialize with `serde`, carry no behavior
//! beyond small accessors, and are never mutated by the engine once returned.

/// Pace zones derived from VDOT
pub mod paces;
/// Training plans
pub mod plan;
/// Target races and experience levels
pub mod race;
/// Plan generation requests and run history
pub mod request;
/// Workout archetypes and materialized workouts
pub mod workout;

pub use paces::{PaceType, VdotPaces};
pub use plan::{TrainingBlock, TrainingPhase, TrainingPlan};
pub use race::{ExperienceLevel, RaceDistance};
pub use request::{PlanGenerationRequest, PlanPreferences, RunRecord};
pub use workout::{Workout, WorkoutTemplate, WorkoutType};

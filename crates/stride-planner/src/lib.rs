// ABOUTME: Training-plan generation engine for race-specific periodized plans
// ABOUTME: VDOT calculator, workout catalog, periodization, plan builder and pace updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

#![deny(unsafe_code)]

//! # Stride Planner
//!
//! Converts a runner's fitness level into a race-specific, multi-week,
//! periodized training plan composed of concrete workouts with target paces.
//!
//! The engine is pure: no I/O, no shared mutable state, no randomness. Every
//! operation that depends on the current time has a variant taking `now`
//! explicitly so identical inputs always produce identical plans.
//!
//! ## Modules
//!
//! - **algorithms**: Jack Daniels' VDOT calculator
//! - **catalog**: per-race workout templates
//! - **selection**: weekly template selection by frequency and phase
//! - **periodization**: plan length, weekly volume and build/peak/taper factors
//! - **scheduling**: weekday rotation honoring rest-day preferences
//! - **plan_builder**: orchestration of plans, weeks and 14-day blocks
//! - **pace_update**: re-pacing incomplete workouts after a VDOT change
//! - **collaborators**: persistence and run-history contracts
//! - **config**: tunable phase constants with environment overrides

/// Fitness algorithms
pub mod algorithms;
/// Static per-race workout templates
pub mod catalog;
/// Persistence and run-history collaborator contracts
pub mod collaborators;
/// Planner configuration
pub mod config;
/// Re-pacing of incomplete workouts
pub mod pace_update;
/// Periodization engine
pub mod periodization;
/// Plan orchestration
pub mod plan_builder;
/// Weekday scheduling
pub mod scheduling;
/// Weekly template selection
pub mod selection;

pub use algorithms::vdot::{EquivalentTimes, VdotCalculator};
pub use catalog::{RaceCatalog, WorkoutCatalog};
pub use collaborators::{
    CollaboratorError, CollaboratorResult, InMemoryPlanRepository, PlanRepository,
    RunHistoryProvider, StaticRunHistory,
};
pub use config::{ConfigError, PeriodizationConfig, PlannerConfig, SelectionConfig};
pub use pace_update::PaceUpdater;
pub use periodization::{PeriodizationEngine, PhaseLengths};
pub use plan_builder::{PlanBuilder, PlanSupersession};
pub use scheduling::WeekdayRotation;
pub use selection::TemplateSelector;

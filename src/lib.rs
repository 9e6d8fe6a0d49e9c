// ABOUTME: Main library entry point for the Stride Coach training-plan platform
// ABOUTME: Wires the planning engine to logging, storage collaborators and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

#![deny(unsafe_code)]

//! # Stride Coach
//!
//! Race-specific, periodized running plans built on Jack Daniels' VDOT
//! methodology.
//!
//! ## Architecture
//!
//! - **stride-core**: error taxonomy, constants and value objects
//! - **stride-planner**: the pure planning engine (VDOT, catalog, periodization,
//!   plan builder, scheduling) and its collaborator contracts
//! - **this crate**: logging setup, the [`service::PlanningService`] that
//!   persists what the engine produces, and the `stride-plan` CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use stride_coach::{ExperienceLevel, PlanBuilder, PlanGenerationRequest, RaceDistance};
//!
//! let request = PlanGenerationRequest::new(
//!     "runner-1",
//!     45.0,
//!     RaceDistance::TenK,
//!     4,
//!     ExperienceLevel::Intermediate,
//! );
//! let block = PlanBuilder::default().generate_14_day_block(&request)?;
//! assert_eq!(block.workouts.len(), 8);
//! # Ok::<(), stride_coach::PlanError>(())
//! ```

/// Service-level error handling
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// Planning service over storage and run-history collaborators
pub mod service;

pub use errors::{ServiceError, ServiceResult};
pub use service::PlanningService;

pub use stride_core::errors::{ErrorCode, ErrorResponse, PlanError, PlanResult};
pub use stride_core::models::{
    ExperienceLevel, PaceType, PlanGenerationRequest, PlanPreferences, RaceDistance, RunRecord,
    TrainingBlock, TrainingPhase, TrainingPlan, VdotPaces, Workout, WorkoutTemplate, WorkoutType,
};
pub use stride_planner::{
    CollaboratorError, ConfigError, InMemoryPlanRepository, PaceUpdater, PeriodizationEngine,
    PlanBuilder, PlanRepository, PlanSupersession, PlannerConfig, RunHistoryProvider,
    StaticRunHistory, TemplateSelector, VdotCalculator, WorkoutCatalog,
};

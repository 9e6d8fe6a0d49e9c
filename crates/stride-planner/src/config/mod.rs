// ABOUTME: Configuration module for the stride-planner crate
// ABOUTME: Re-exports planner configuration and its validation error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

/// Configuration validation errors
pub mod error;

/// Periodization and workout-selection tuning
pub mod planner;

pub use error::ConfigError;
pub use planner::{PeriodizationConfig, PlannerConfig, SelectionConfig};

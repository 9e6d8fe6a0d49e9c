// ABOUTME: Core types and constants for the Stride Coach training-plan engine
// ABOUTME: Foundation crate with error taxonomy, domain constants, and plan/workout value objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the Stride Coach
//! training-plan engine. It holds no algorithms: everything here is a value
//! object, an error type, or a named constant, so the planner crate and the
//! application crate can share one vocabulary.
//!
//! ## Modules
//!
//! - **errors**: `PlanError` taxonomy, stable `ErrorCode`s and `ErrorResponse`
//! - **constants**: units, VDOT bounds, plan limits and periodization defaults
//! - **models**: race distances, pace zones, plans, workouts and requests

/// Plan-generation error taxonomy with stable error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Value objects exchanged with the persistence and messaging collaborators
pub mod models;

pub use errors::{ErrorCode, ErrorResponse, PlanError, PlanResult};

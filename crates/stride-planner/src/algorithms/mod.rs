// ABOUTME: Fitness algorithm implementations used by the plan builder
// ABOUTME: Currently the Jack Daniels VDOT calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

/// Jack Daniels' VDOT calculator
pub mod vdot;

pub use vdot::{EquivalentTimes, VdotCalculator};

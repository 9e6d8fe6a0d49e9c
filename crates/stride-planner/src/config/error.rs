// ABOUTME: Configuration error types for planner configuration validation
// ABOUTME: Defines error variants for invalid ranges, ordering violations and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! Configuration error types for planner configuration validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., percentage not between 1-100)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Two related values are in the wrong order (e.g., min above max)
    #[error("Invalid ordering: {0}")]
    InvalidOrdering(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error for {variable}: '{value}'")]
    Parse {
        /// Environment variable name
        variable: &'static str,
        /// Raw value that failed to parse
        value: String,
    },
}

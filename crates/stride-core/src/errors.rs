// ABOUTME: Error taxonomy for training-plan generation failures
// ABOUTME: Maps invalid input, unsupported races and degenerate schedules to stable error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! # Plan Error Types
//!
//! Every validation failure in the engine surfaces as a [`PlanError`] returned
//! synchronously at the point of detection. The calling layer translates the
//! error into a user-facing message through its [`ErrorCode`] or the
//! serializable [`ErrorResponse`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes exposed to the calling layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Non-positive distance/time, out-of-range frequency or other malformed input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Target race key not present in the workout catalog
    #[serde(rename = "UNSUPPORTED_RACE")]
    UnsupportedRace,
    /// Plan would be shorter than the minimum plan length
    #[serde(rename = "DEGENERATE_SCHEDULE")]
    DegenerateSchedule,
}

impl ErrorCode {
    /// Short human-readable description of the code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::UnsupportedRace => "Unsupported race",
            Self::DegenerateSchedule => "Degenerate schedule",
        }
    }

    /// Wire representation of the code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::UnsupportedRace => "UNSUPPORTED_RACE",
            Self::DegenerateSchedule => "DEGENERATE_SCHEDULE",
        }
    }
}

/// Errors raised while generating plans and workouts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A request field or function argument is structurally invalid
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field or argument
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Unknown target race key
    #[error("Unsupported race '{0}'. Valid options: 5k, 10k, half_marathon, marathon")]
    UnsupportedRace(String),

    /// Computed plan length is below the minimum
    #[error("Degenerate schedule: {total_weeks} weeks is below the {minimum}-week minimum")]
    DegenerateSchedule {
        /// Computed plan length in weeks
        total_weeks: u32,
        /// Minimum accepted plan length in weeks
        minimum: u32,
    },
}

impl PlanError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Create an unsupported race error
    #[must_use]
    pub fn unsupported_race(key: impl Into<String>) -> Self {
        Self::UnsupportedRace(key.into())
    }

    /// Create a degenerate schedule error
    #[must_use]
    pub const fn degenerate_schedule(total_weeks: u32, minimum: u32) -> Self {
        Self::DegenerateSchedule {
            total_weeks,
            minimum,
        }
    }

    /// Error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { .. } => ErrorCode::InvalidInput,
            Self::UnsupportedRace(_) => ErrorCode::UnsupportedRace,
            Self::DegenerateSchedule { .. } => ErrorCode::DegenerateSchedule,
        }
    }
}

/// Result type alias for plan-generation operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Serializable error payload handed to the calling layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Error details inside an [`ErrorResponse`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured context (offending field, computed weeks, race key)
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<&PlanError> for ErrorResponse {
    fn from(error: &PlanError) -> Self {
        let details = match error {
            PlanError::InvalidInput { field, .. } => serde_json::json!({ "field": field }),
            PlanError::UnsupportedRace(key) => serde_json::json!({ "target_race": key }),
            PlanError::DegenerateSchedule {
                total_weeks,
                minimum,
            } => serde_json::json!({ "total_weeks": total_weeks, "minimum": minimum }),
        };

        Self {
            error: ErrorResponseDetails {
                code: error.code(),
                message: error.to_string(),
                details,
            },
        }
    }
}

impl From<PlanError> for ErrorResponse {
    fn from(error: PlanError) -> Self {
        Self::from(&error)
    }
}

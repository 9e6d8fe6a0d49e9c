// ABOUTME: Service-level error type wrapping engine, collaborator and lookup failures
// ABOUTME: Maps every failure onto a stable error code for the calling layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use serde_json::json;
use stride_core::errors::{ErrorCode, ErrorResponse, ErrorResponseDetails, PlanError};
use stride_planner::CollaboratorError;
use thiserror::Error;

/// Errors raised by the planning service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request rejected by the planning engine
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// Storage or run-history failure
    #[error("Collaborator failure: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// The user has no active plan to update
    #[error("No active training plan for user '{0}'")]
    NoActivePlan(String),
}

impl ServiceError {
    /// Engine error code, when the engine rejected the request
    #[must_use]
    pub const fn plan_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Plan(error) => Some(error.code()),
            Self::Collaborator(_) | Self::NoActivePlan(_) => None,
        }
    }

    /// Serializable payload for the calling layer
    ///
    /// Only engine errors carry a stable code; lookup misses are reported as
    /// invalid input and collaborator failures keep their message.
    #[must_use]
    pub fn to_response(&self) -> Option<ErrorResponse> {
        match self {
            Self::Plan(error) => Some(ErrorResponse::from(error)),
            Self::NoActivePlan(user_id) => Some(ErrorResponse {
                error: ErrorResponseDetails {
                    code: ErrorCode::InvalidInput,
                    message: self.to_string(),
                    details: json!({ "user_id": user_id }),
                },
            }),
            Self::Collaborator(_) => None,
        }
    }
}

/// Result type alias for planning service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_errors_keep_their_code() {
        let error = ServiceError::from(PlanError::unsupported_race("ultra"));
        assert_eq!(error.plan_code(), Some(ErrorCode::UnsupportedRace));
        assert!(error.to_string().contains("ultra"));
    }

    #[test]
    fn test_no_active_plan_response() {
        let error = ServiceError::NoActivePlan("runner-1".to_owned());
        let response = error.to_response().unwrap();
        assert_eq!(response.error.code, ErrorCode::InvalidInput);
        assert!(ServiceError::from(CollaboratorError::LockPoisoned)
            .to_response()
            .is_none());
    }
}

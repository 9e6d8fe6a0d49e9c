// ABOUTME: Plan generation requests, scheduling preferences and run history records
// ABOUTME: Input value objects supplied by the conversational and run-logging collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::race::{ExperienceLevel, RaceDistance};

/// Scheduling preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanPreferences {
    /// Prefer not to schedule runs on consecutive days
    #[serde(default)]
    pub avoid_back_to_back: bool,
    /// Weekdays kept free of runs (0 = Sunday ... 6 = Saturday)
    #[serde(default)]
    pub preferred_rest_days: Vec<u8>,
    /// Longest workout the runner can fit, in minutes
    #[serde(default)]
    pub max_workout_duration: Option<f64>,
}

/// Everything the engine needs to generate a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanGenerationRequest {
    /// Owning user
    pub user_id: String,
    /// Current fitness estimate
    pub current_vdot: f64,
    /// Goal race
    pub target_race: RaceDistance,
    /// Goal race date
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
    /// Runs per week
    pub weekly_frequency: u8,
    /// Experience level
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Current weekly mileage, overriding the estimate when present
    #[serde(default)]
    pub weekly_mileage: Option<f64>,
    /// Past injuries reported by the runner
    #[serde(default)]
    pub injury_history: Vec<String>,
    /// Scheduling preferences
    #[serde(default)]
    pub preferences: Option<PlanPreferences>,
}

impl PlanGenerationRequest {
    /// Create a request with the required fields
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        current_vdot: f64,
        target_race: RaceDistance,
        weekly_frequency: u8,
        experience_level: ExperienceLevel,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            current_vdot,
            target_race,
            target_date: None,
            weekly_frequency,
            experience_level,
            weekly_mileage: None,
            injury_history: Vec::new(),
            preferences: None,
        }
    }

    /// Set the goal race date
    #[must_use]
    pub fn target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    /// Set the current weekly mileage
    #[must_use]
    pub fn weekly_mileage(mut self, miles: f64) -> Self {
        self.weekly_mileage = Some(miles);
        self
    }

    /// Add a reported injury
    #[must_use]
    pub fn injury(mut self, description: impl Into<String>) -> Self {
        self.injury_history.push(description.into());
        self
    }

    /// Set scheduling preferences
    #[must_use]
    pub fn preferences(mut self, preferences: PlanPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Preferences, or defaults when none were supplied
    #[must_use]
    pub fn preferences_or_default(&self) -> PlanPreferences {
        self.preferences.clone().unwrap_or_default()
    }
}

/// One logged run from the run-logging collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Distance in miles
    pub distance: f64,
    /// Elapsed time in seconds
    pub duration: f64,
    /// Day of the run
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_with_defaults() {
        let json = r#"{
            "user_id": "runner-1",
            "current_vdot": 45.0,
            "target_race": "10k",
            "weekly_frequency": 4
        }"#;

        let request: PlanGenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.target_race, RaceDistance::TenK);
        assert_eq!(request.experience_level, ExperienceLevel::Intermediate);
        assert!(request.injury_history.is_empty());
        assert_eq!(request.preferences_or_default(), PlanPreferences::default());
    }

    #[test]
    fn test_request_rejects_unknown_race() {
        let json = r#"{
            "user_id": "runner-1",
            "current_vdot": 45.0,
            "target_race": "100_miler",
            "weekly_frequency": 4
        }"#;

        let error = serde_json::from_str::<PlanGenerationRequest>(json).unwrap_err();
        assert!(error.to_string().contains("Unsupported race '100_miler'"));
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let date = NaiveDate::from_ymd_opt(2027, 4, 18).unwrap();
        let request = PlanGenerationRequest::new(
            "runner-2",
            50.0,
            RaceDistance::Marathon,
            5,
            ExperienceLevel::Advanced,
        )
        .target_date(date)
        .weekly_mileage(40.0)
        .injury("plantar fasciitis");

        assert_eq!(request.target_date, Some(date));
        assert_eq!(request.weekly_mileage, Some(40.0));
        assert_eq!(request.injury_history.len(), 1);
    }
}

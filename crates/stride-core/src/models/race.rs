// ABOUTME: Target race distances and runner experience levels
// ABOUTME: Closed enumerations with parsing, display and serde wire keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::units::race_miles;
use crate::errors::PlanError;

/// Race distances a plan can target
///
/// Unknown keys fail to parse with [`PlanError::UnsupportedRace`], both through
/// [`FromStr`] and when deserializing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum RaceDistance {
    /// 5 kilometers
    #[serde(rename = "5k")]
    FiveK,
    /// 10 kilometers
    #[serde(rename = "10k")]
    TenK,
    /// Half marathon
    #[serde(rename = "half_marathon")]
    HalfMarathon,
    /// Marathon
    #[serde(rename = "marathon")]
    Marathon,
}

impl RaceDistance {
    /// Every supported race, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Race distance in miles
    #[must_use]
    pub const fn miles(self) -> f64 {
        match self {
            Self::FiveK => race_miles::FIVE_K,
            Self::TenK => race_miles::TEN_K,
            Self::HalfMarathon => race_miles::HALF_MARATHON,
            Self::Marathon => race_miles::MARATHON,
        }
    }

    /// Wire key (`5k`, `10k`, `half_marathon`, `marathon`)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FiveK => "5k",
            Self::TenK => "10k",
            Self::HalfMarathon => "half_marathon",
            Self::Marathon => "marathon",
        }
    }

    /// Display name used in workout descriptions
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RaceDistance {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "5k" => Ok(Self::FiveK),
            "10k" => Ok(Self::TenK),
            "half_marathon" | "half-marathon" | "half" => Ok(Self::HalfMarathon),
            "marathon" => Ok(Self::Marathon),
            _ => Err(PlanError::unsupported_race(s)),
        }
    }
}

impl TryFrom<String> for RaceDistance {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Self-reported running experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to structured training
    Beginner,
    /// Several seasons of consistent running
    #[default]
    Intermediate,
    /// Experienced racer with high training tolerance
    Advanced,
}

impl ExperienceLevel {
    /// Every level, least experienced first
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ExperienceLevel {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(PlanError::invalid_input(
                "experience_level",
                format!("unknown level '{other}'. Valid options: beginner, intermediate, advanced"),
            )),
        }
    }
}

// ABOUTME: Training pace zones derived from a VDOT score
// ABOUTME: Five Daniels pace types ordered from slowest (easy) to fastest (repetition)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use std::fmt;

use serde::{Deserialize, Serialize};

/// Daniels pace zone keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceType {
    /// Easy and long runs
    Easy,
    /// Marathon race pace
    Marathon,
    /// Lactate threshold (tempo) pace
    Threshold,
    /// VO2max interval pace
    Interval,
    /// Repetition pace
    Repetition,
}

impl PaceType {
    /// Every pace type, slowest first
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
    ];

    /// Label used in workout descriptions
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Marathon => "marathon",
            Self::Threshold => "threshold",
            Self::Interval => "interval",
            Self::Repetition => "repetition",
        }
    }
}

impl fmt::Display for PaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Training paces in seconds per mile
///
/// Larger values are slower. For every VDOT in range the ordering
/// `easy > marathon > threshold > interval > repetition > 0` holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VdotPaces {
    /// Easy pace
    pub easy: f64,
    /// Marathon pace
    pub marathon: f64,
    /// Threshold pace
    pub threshold: f64,
    /// Interval pace
    pub interval: f64,
    /// Repetition pace
    pub repetition: f64,
}

impl VdotPaces {
    /// Pace for a zone
    #[must_use]
    pub const fn get(&self, pace_type: PaceType) -> f64 {
        match pace_type {
            PaceType::Easy => self.easy,
            PaceType::Marathon => self.marathon,
            PaceType::Threshold => self.threshold,
            PaceType::Interval => self.interval,
            PaceType::Repetition => self.repetition,
        }
    }

    /// Whether the paces are positive and strictly ordered slowest to fastest
    #[must_use]
    pub fn is_strictly_ordered(&self) -> bool {
        self.easy > self.marathon
            && self.marathon > self.threshold
            && self.threshold > self.interval
            && self.interval > self.repetition
            && self.repetition > 0.0
    }
}

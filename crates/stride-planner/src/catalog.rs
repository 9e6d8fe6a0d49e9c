// ABOUTME: Static per-race catalog of workout templates
// ABOUTME: Easy, long, tempo, interval and optional recovery archetypes with volume shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use serde::Serialize;
use stride_core::models::{PaceType, RaceDistance, WorkoutTemplate, WorkoutType};

/// Workout archetypes for one target race
///
/// Ratios are relative volume weights; a week divides each selected template's
/// ratio by the sum over the week. Longer races shift volume from quality work
/// to the long run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaceCatalog {
    /// Race the templates are tuned for
    pub race: RaceDistance,
    /// Easy aerobic run
    pub easy: WorkoutTemplate,
    /// Long run
    pub long: WorkoutTemplate,
    /// Threshold (tempo) session
    pub tempo: WorkoutTemplate,
    /// VO2max interval session
    pub intervals: WorkoutTemplate,
    /// Recovery run; shorter races have none
    pub recovery: Option<WorkoutTemplate>,
}

impl RaceCatalog {
    /// Recovery template, or the easy template when the race has none
    #[must_use]
    pub fn recovery_or_easy(&self) -> WorkoutTemplate {
        self.recovery.unwrap_or(self.easy)
    }

    /// Quality templates in rotation order
    #[must_use]
    pub const fn quality_pool(&self) -> [WorkoutTemplate; 2] {
        [self.tempo, self.intervals]
    }

    /// Template for a workout type, if the catalog has one
    #[must_use]
    pub const fn template_for(&self, workout_type: WorkoutType) -> Option<WorkoutTemplate> {
        match workout_type {
            WorkoutType::Easy => Some(self.easy),
            WorkoutType::Long => Some(self.long),
            WorkoutType::Tempo => Some(self.tempo),
            WorkoutType::Intervals => Some(self.intervals),
            WorkoutType::Recovery => self.recovery,
            WorkoutType::Race => None,
        }
    }
}

const fn template(
    workout_type: WorkoutType,
    distance_ratio: f64,
    pace_type: PaceType,
    effort_level: u8,
    recovery_days: u8,
) -> WorkoutTemplate {
    WorkoutTemplate {
        workout_type,
        distance_ratio,
        pace_type,
        effort_level,
        recovery_days,
    }
}

const fn easy(ratio: f64) -> WorkoutTemplate {
    template(WorkoutType::Easy, ratio, PaceType::Easy, 3, 0)
}

const fn long(ratio: f64) -> WorkoutTemplate {
    template(WorkoutType::Long, ratio, PaceType::Easy, 5, 1)
}

const fn tempo(ratio: f64) -> WorkoutTemplate {
    template(WorkoutType::Tempo, ratio, PaceType::Threshold, 7, 1)
}

const fn intervals(ratio: f64) -> WorkoutTemplate {
    template(WorkoutType::Intervals, ratio, PaceType::Interval, 8, 2)
}

const fn recovery(ratio: f64) -> WorkoutTemplate {
    template(WorkoutType::Recovery, ratio, PaceType::Easy, 2, 0)
}

static FIVE_K: RaceCatalog = RaceCatalog {
    race: RaceDistance::FiveK,
    easy: easy(0.20),
    long: long(0.30),
    tempo: tempo(0.15),
    intervals: intervals(0.15),
    recovery: None,
};

static TEN_K: RaceCatalog = RaceCatalog {
    race: RaceDistance::TenK,
    easy: easy(0.20),
    long: long(0.30),
    tempo: tempo(0.17),
    intervals: intervals(0.15),
    recovery: None,
};

static HALF_MARATHON: RaceCatalog = RaceCatalog {
    race: RaceDistance::HalfMarathon,
    easy: easy(0.18),
    long: long(0.32),
    tempo: tempo(0.18),
    intervals: intervals(0.12),
    recovery: Some(recovery(0.10)),
};

static MARATHON: RaceCatalog = RaceCatalog {
    race: RaceDistance::Marathon,
    easy: easy(0.17),
    long: long(0.35),
    tempo: tempo(0.15),
    intervals: intervals(0.10),
    recovery: Some(recovery(0.10)),
};

/// Read-only workout catalog keyed by target race
pub struct WorkoutCatalog;

impl WorkoutCatalog {
    /// Templates for a target race
    #[must_use]
    pub const fn for_race(race: RaceDistance) -> &'static RaceCatalog {
        match race {
            RaceDistance::FiveK => &FIVE_K,
            RaceDistance::TenK => &TEN_K,
            RaceDistance::HalfMarathon => &HALF_MARATHON,
            RaceDistance::Marathon => &MARATHON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_race_has_required_templates() {
        for race in RaceDistance::ALL {
            let catalog = WorkoutCatalog::for_race(race);
            assert_eq!(catalog.race, race);
            assert_eq!(catalog.easy.workout_type, WorkoutType::Easy);
            assert_eq!(catalog.long.workout_type, WorkoutType::Long);
            assert_eq!(catalog.tempo.pace_type, PaceType::Threshold);
            assert_eq!(catalog.intervals.pace_type, PaceType::Interval);
        }
    }

    #[test]
    fn test_templates_are_well_formed() {
        for race in RaceDistance::ALL {
            let catalog = WorkoutCatalog::for_race(race);
            let templates = [
                Some(catalog.easy),
                Some(catalog.long),
                Some(catalog.tempo),
                Some(catalog.intervals),
                catalog.recovery,
            ];
            for template in templates.into_iter().flatten() {
                assert!(template.distance_ratio > 0.0 && template.distance_ratio <= 1.0);
                assert!((1..=10).contains(&template.effort_level));
                assert_eq!(template.workout_type.pace_type(), Some(template.pace_type));
            }
        }
    }

    #[test]
    fn test_recovery_falls_back_to_easy_for_short_races() {
        let five_k = WorkoutCatalog::for_race(RaceDistance::FiveK);
        assert!(five_k.recovery.is_none());
        assert_eq!(five_k.recovery_or_easy(), five_k.easy);

        let marathon = WorkoutCatalog::for_race(RaceDistance::Marathon);
        assert_eq!(
            marathon.recovery_or_easy().workout_type,
            WorkoutType::Recovery
        );
    }

    #[test]
    fn test_long_run_share_grows_with_distance() {
        let shares: Vec<f64> = RaceDistance::ALL
            .iter()
            .map(|race| WorkoutCatalog::for_race(*race).long.distance_ratio)
            .collect();
        assert!(shares.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

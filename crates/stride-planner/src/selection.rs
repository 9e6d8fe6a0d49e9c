// ABOUTME: Weekly workout-template selection by run frequency and plan phase
// ABOUTME: Deterministic tempo/interval rotation with recovery-week substitution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use stride_core::constants::plan_limits::{MAX_WEEKLY_FREQUENCY, MIN_WEEKLY_FREQUENCY};
use stride_core::errors::{PlanError, PlanResult};
use stride_core::models::{RaceDistance, WorkoutTemplate};

use crate::catalog::{RaceCatalog, WorkoutCatalog};
use crate::config::SelectionConfig;

/// Picks the templates for one training week
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateSelector {
    config: SelectionConfig,
}

impl TemplateSelector {
    /// Create a selector with custom thresholds
    #[must_use]
    pub const fn with_config(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Selection thresholds in use
    #[must_use]
    pub const fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Templates for `week` of a `total_weeks` plan, in day order
    ///
    /// The week always opens with an easy run, a quality session and the long
    /// run; higher frequencies add easy, recovery and a second quality session.
    /// Exactly `frequency` templates are returned.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if `frequency` is outside [2, 7]
    pub fn select(
        &self,
        race: RaceDistance,
        frequency: u8,
        week: u32,
        total_weeks: u32,
    ) -> PlanResult<Vec<WorkoutTemplate>> {
        if !(MIN_WEEKLY_FREQUENCY..=MAX_WEEKLY_FREQUENCY).contains(&frequency) {
            return Err(PlanError::invalid_input(
                "weekly_frequency",
                format!(
                    "must be between {MIN_WEEKLY_FREQUENCY} and {MAX_WEEKLY_FREQUENCY}, got {frequency}"
                ),
            ));
        }

        let catalog = WorkoutCatalog::for_race(race);
        let quality = self.quality_template(catalog, week, total_weeks);

        let mut templates = Vec::with_capacity(usize::from(MAX_WEEKLY_FREQUENCY));
        templates.push(catalog.easy);
        templates.push(quality);
        templates.push(catalog.long);

        if frequency >= 4 {
            let interval = self.config.recovery_week_interval.max(1);
            if week % interval == 0 {
                templates.push(catalog.recovery_or_easy());
            } else {
                templates.push(catalog.easy);
            }
        }
        if frequency >= 5 {
            templates.push(Self::second_quality(catalog, quality));
        }
        if frequency >= 6 {
            templates.push(catalog.recovery_or_easy());
        }
        if frequency >= 7 {
            templates.push(catalog.easy);
        }

        templates.truncate(usize::from(frequency));
        Ok(templates)
    }

    /// Quality session for the point reached in the plan
    ///
    /// Early weeks are tempo-only, late weeks interval-only, and the middle of
    /// the plan alternates by week parity (even weeks run intervals).
    #[must_use]
    pub fn quality_template(
        &self,
        catalog: &RaceCatalog,
        week: u32,
        total_weeks: u32,
    ) -> WorkoutTemplate {
        let phase = f64::from(week) / f64::from(total_weeks.max(1));

        if phase < self.config.tempo_only_until {
            catalog.tempo
        } else if phase < self.config.interval_bias_from {
            if week % 2 == 0 {
                catalog.intervals
            } else {
                catalog.tempo
            }
        } else {
            catalog.intervals
        }
    }

    /// Next template in the quality pool after `first`
    fn second_quality(catalog: &RaceCatalog, first: WorkoutTemplate) -> WorkoutTemplate {
        let pool = catalog.quality_pool();
        let position = pool
            .iter()
            .position(|candidate| candidate.workout_type == first.workout_type)
            .unwrap_or(0);
        pool[(position + 1) % pool.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::models::WorkoutType;

    fn types(templates: &[WorkoutTemplate]) -> Vec<WorkoutType> {
        templates.iter().map(|t| t.workout_type).collect()
    }

    #[test]
    fn test_frequency_bounds() {
        let selector = TemplateSelector::default();
        assert!(selector.select(RaceDistance::FiveK, 1, 1, 10).is_err());
        assert!(selector.select(RaceDistance::FiveK, 8, 1, 10).is_err());
        for frequency in 2..=7 {
            let templates = selector
                .select(RaceDistance::TenK, frequency, 1, 10)
                .unwrap();
            assert_eq!(templates.len(), usize::from(frequency));
        }
    }

    #[test]
    fn test_quality_by_phase() {
        let selector = TemplateSelector::default();
        let catalog = WorkoutCatalog::for_race(RaceDistance::HalfMarathon);

        assert_eq!(
            selector.quality_template(catalog, 2, 10).workout_type,
            WorkoutType::Tempo
        );
        assert_eq!(
            selector.quality_template(catalog, 4, 10).workout_type,
            WorkoutType::Intervals
        );
        assert_eq!(
            selector.quality_template(catalog, 5, 10).workout_type,
            WorkoutType::Tempo
        );
        assert_eq!(
            selector.quality_template(catalog, 9, 10).workout_type,
            WorkoutType::Intervals
        );
    }

    #[test]
    fn test_full_week_layout() {
        let selector = TemplateSelector::default();
        let week = selector
            .select(RaceDistance::Marathon, 7, 3, 20)
            .unwrap();

        assert_eq!(
            types(&week),
            vec![
                WorkoutType::Easy,
                WorkoutType::Tempo,
                WorkoutType::Long,
                WorkoutType::Recovery,
                WorkoutType::Intervals,
                WorkoutType::Recovery,
                WorkoutType::Easy,
            ]
        );
    }

    #[test]
    fn test_recovery_week_without_recovery_template() {
        let selector = TemplateSelector::default();
        let week = selector.select(RaceDistance::FiveK, 4, 3, 10).unwrap();
        assert_eq!(week[3].workout_type, WorkoutType::Easy);
    }
}

// ABOUTME: Weekday rotation mapping workout slots onto calendar days
// ABOUTME: Honors preferred rest days and optionally avoids back-to-back training days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

use chrono::{Datelike, Days, NaiveDate, Weekday};
use stride_core::constants::units::DAYS_PER_WEEK;
use stride_core::errors::{PlanError, PlanResult};

/// Order in which weekdays are filled; spreads the first runs across the week
const ROTATION: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Wed,
    Weekday::Fri,
    Weekday::Sun,
    Weekday::Tue,
    Weekday::Thu,
    Weekday::Sat,
];

/// Weekdays available for training after removing rest days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayRotation {
    available: Vec<Weekday>,
}

impl WeekdayRotation {
    /// Rotation without the given rest days (0 = Sunday .. 6 = Saturday)
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if a rest day index is above 6
    pub fn new(rest_days: &[u8]) -> PlanResult<Self> {
        if let Some(day) = rest_days.iter().find(|day| **day > 6) {
            return Err(PlanError::invalid_input(
                "preferred_rest_days",
                format!("weekday index must be between 0 (Sunday) and 6, got {day}"),
            ));
        }

        let available = ROTATION
            .into_iter()
            .filter(|weekday| {
                let index = weekday.num_days_from_sunday();
                !rest_days.iter().any(|rest| u32::from(*rest) == index)
            })
            .collect();

        Ok(Self { available })
    }

    /// Weekdays left for training, in rotation order
    #[must_use]
    pub fn available(&self) -> &[Weekday] {
        &self.available
    }

    /// Weekday for each of `frequency` workout slots
    ///
    /// With `avoid_back_to_back`, days not adjacent to an already chosen day
    /// are taken first and the remaining slots are filled in rotation order.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidInput` if fewer than `frequency` days remain
    pub fn training_days(&self, frequency: u8, avoid_back_to_back: bool) -> PlanResult<Vec<Weekday>> {
        let wanted = usize::from(frequency);
        if self.available.len() < wanted {
            return Err(PlanError::invalid_input(
                "preferred_rest_days",
                format!(
                    "{} training days remain but {wanted} runs per week were requested",
                    self.available.len()
                ),
            ));
        }

        if !avoid_back_to_back {
            return Ok(self.available[..wanted].to_vec());
        }

        let mut chosen: Vec<Weekday> = Vec::with_capacity(wanted);
        for weekday in &self.available {
            if chosen.len() == wanted {
                break;
            }
            let adjacent = chosen
                .iter()
                .any(|day| *day == weekday.succ() || *day == weekday.pred());
            if !adjacent {
                chosen.push(*weekday);
            }
        }
        for weekday in &self.available {
            if chosen.len() == wanted {
                break;
            }
            if !chosen.contains(weekday) {
                chosen.push(*weekday);
            }
        }

        Ok(chosen)
    }

    /// First date on or after `week_start` falling on `weekday`
    #[must_use]
    pub fn date_in_week(week_start: NaiveDate, weekday: Weekday) -> NaiveDate {
        let offset = (i64::from(weekday.num_days_from_monday())
            - i64::from(week_start.weekday().num_days_from_monday()))
        .rem_euclid(DAYS_PER_WEEK);
        week_start + Days::new(offset.unsigned_abs())
    }
}

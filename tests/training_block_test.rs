// ABOUTME: Integration tests for scheduled 14-day training blocks
// ABOUTME: Calendar placement, weekday rotation, rest days and back-to-back avoidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use common::{date, fixed_now, midweek_now, request, request_with_rest_days};
use stride_coach::{PlanBuilder, PlanError, RaceDistance, Workout};

fn dates(workouts: &[Workout]) -> Vec<NaiveDate> {
    workouts
        .iter()
        .map(|workout| workout.scheduled_date.unwrap())
        .collect()
}

#[test]
fn test_block_from_monday() {
    let block = PlanBuilder::default()
        .generate_14_day_block_from(&request(RaceDistance::FiveK, 45.0, 4), fixed_now())
        .unwrap();

    assert_eq!(block.plan.total_weeks, 10);
    assert_eq!(block.workouts.len(), 8);
    assert_eq!(
        dates(&block.workouts),
        vec![
            date(2026, 10, 19),
            date(2026, 10, 21),
            date(2026, 10, 23),
            date(2026, 10, 25),
            date(2026, 10, 26),
            date(2026, 10, 28),
            date(2026, 10, 30),
            date(2026, 11, 1),
        ]
    );
    assert!(block.workouts[..4].iter().all(|workout| workout.week == 1));
    assert!(block.workouts[4..].iter().all(|workout| workout.week == 2));
}

#[test]
fn test_block_from_midweek() {
    let block = PlanBuilder::default()
        .generate_14_day_block_from(&request(RaceDistance::FiveK, 45.0, 4), midweek_now())
        .unwrap();

    assert_eq!(
        dates(&block.workouts),
        vec![
            date(2026, 10, 21),
            date(2026, 10, 23),
            date(2026, 10, 25),
            date(2026, 10, 26),
            date(2026, 10, 28),
            date(2026, 10, 30),
            date(2026, 11, 1),
            date(2026, 11, 2),
        ]
    );
    // Monday's slot of week 1 falls after the weekend
    assert_eq!(block.workouts[3].week, 1);
    assert_eq!(block.workouts[3].day, 1);
}

#[test]
fn test_block_dates_are_increasing_and_in_window() {
    let builder = PlanBuilder::default();
    for frequency in 2..=7 {
        for now in [fixed_now(), midweek_now()] {
            let block = builder
                .generate_14_day_block_from(
                    &request(RaceDistance::Marathon, 50.0, frequency),
                    now,
                )
                .unwrap();
            let scheduled = dates(&block.workouts);
            let start = now.date_naive();

            assert_eq!(scheduled.len(), 2 * usize::from(frequency));
            assert!(scheduled.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(scheduled
                .iter()
                .all(|day| (0..14).contains(&(*day - start).num_days())));
        }
    }
}

#[test]
fn test_each_week_uses_the_same_weekdays() {
    let block = PlanBuilder::default()
        .generate_14_day_block_from(&request(RaceDistance::TenK, 45.0, 3), fixed_now())
        .unwrap();

    let weekdays = |week: u32| -> HashSet<Weekday> {
        block
            .workouts
            .iter()
            .filter(|workout| workout.week == week)
            .map(|workout| workout.scheduled_date.unwrap().weekday())
            .collect()
    };
    let expected: HashSet<Weekday> = [Weekday::Mon, Weekday::Wed, Weekday::Fri].into();
    assert_eq!(weekdays(1), expected);
    assert_eq!(weekdays(2), expected);
}

#[test]
fn test_rest_days_are_never_scheduled() {
    let request = request_with_rest_days(RaceDistance::HalfMarathon, 5, &[0, 6], false);
    let block = PlanBuilder::default()
        .generate_14_day_block_from(&request, fixed_now())
        .unwrap();

    assert_eq!(block.workouts.len(), 10);
    for day in dates(&block.workouts) {
        assert!(!matches!(day.weekday(), Weekday::Sat | Weekday::Sun), "{day}");
    }
}

#[test]
fn test_too_many_rest_days() {
    let request = request_with_rest_days(RaceDistance::TenK, 4, &[0, 1, 2, 3], false);
    let error = PlanBuilder::default()
        .generate_14_day_block_from(&request, fixed_now())
        .unwrap_err();

    assert!(matches!(
        error,
        PlanError::InvalidInput {
            field: "preferred_rest_days",
            ..
        }
    ));
}

#[test]
fn test_avoid_back_to_back() {
    // With Friday off, the plain rotation would run Sunday then Monday
    let spread = request_with_rest_days(RaceDistance::TenK, 3, &[5], true);
    let block = PlanBuilder::default()
        .generate_14_day_block_from(&spread, fixed_now())
        .unwrap();

    let weekdays: Vec<Weekday> = block.workouts[..3]
        .iter()
        .map(|workout| workout.scheduled_date.unwrap().weekday())
        .collect();
    assert_eq!(weekdays, vec![Weekday::Mon, Weekday::Wed, Weekday::Sat]);

    let scheduled = dates(&block.workouts);
    assert!(scheduled
        .windows(2)
        .all(|pair| (pair[1] - pair[0]).num_days() > 1));
}

#[test]
fn test_block_workouts_belong_to_the_plan() {
    let block = PlanBuilder::default()
        .generate_14_day_block_from(&request(RaceDistance::TenK, 45.0, 6), fixed_now())
        .unwrap();

    assert!(block.plan.id.is_none());
    assert!(block
        .workouts
        .iter()
        .all(|workout| workout.user_id == block.plan.user_id && workout.plan_id.is_none()));
}

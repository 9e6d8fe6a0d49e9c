// ABOUTME: Planning service wiring the plan builder to persistence and run-history collaborators
// ABOUTME: Starts scheduled training blocks and applies fitness changes to active plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! # Planning Service
//!
//! The engine in `stride_planner` is pure. This service is the thin layer that
//! persists what it produces: every new plan is stored together with its
//! workouts through [`PlanRepository::activate_block`], so a failed write never
//! leaves an active plan without its workouts.

use chrono::{DateTime, Days, NaiveDate, Utc};
use stride_core::models::{PlanGenerationRequest, TrainingBlock};
use stride_planner::{PaceUpdater, PlanBuilder, PlanRepository, RunHistoryProvider, VdotCalculator};
use tracing::instrument;

use crate::errors::{ServiceError, ServiceResult};
use crate::logging::PlanLogger;

/// Days of run history considered when estimating VDOT
pub const DEFAULT_LOOKBACK_DAYS: u64 = 42;

/// Plan generation backed by storage and run history
pub struct PlanningService<R, H> {
    builder: PlanBuilder,
    repository: R,
    history: H,
    lookback_days: u64,
}

impl<R, H> PlanningService<R, H>
where
    R: PlanRepository,
    H: RunHistoryProvider,
{
    /// Create a service over the given collaborators
    #[must_use]
    pub fn new(builder: PlanBuilder, repository: R, history: H) -> Self {
        Self {
            builder,
            repository,
            history,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }

    /// Change how far back run history is read
    #[must_use]
    pub fn with_lookback_days(mut self, days: u64) -> Self {
        self.lookback_days = days;
        self
    }

    /// Plan storage
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Estimate the user's VDOT from runs logged in the lookback window
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Collaborator` if the run history cannot be read
    #[instrument(skip(self))]
    pub fn estimate_vdot(&self, user_id: &str, today: NaiveDate) -> ServiceResult<f64> {
        let since = today
            .checked_sub_days(Days::new(self.lookback_days))
            .unwrap_or(NaiveDate::MIN);
        let runs = self.history.recent_runs(user_id, since)?;
        Ok(VdotCalculator::calculate_from_recent_runs(&runs))
    }

    /// Generate a 14-day block and store it as the user's active plan
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Plan` for rejected requests and
    /// `ServiceError::Collaborator` for storage failures
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub fn start_block(
        &self,
        request: &PlanGenerationRequest,
        now: DateTime<Utc>,
    ) -> ServiceResult<TrainingBlock> {
        let block = self.builder.generate_14_day_block_from(request, now)?;
        let stored = self.repository.activate_block(block)?;

        PlanLogger::log_plan_activated(&stored.plan, stored.workouts.len());
        Ok(stored)
    }

    /// Estimate VDOT from run history, then start a block at that fitness
    ///
    /// # Errors
    ///
    /// See [`Self::estimate_vdot`] and [`Self::start_block`]
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub fn start_block_from_history(
        &self,
        request: &PlanGenerationRequest,
        now: DateTime<Utc>,
    ) -> ServiceResult<TrainingBlock> {
        let mut request = request.clone();
        request.current_vdot = self.estimate_vdot(&request.user_id, now.date_naive())?;
        self.start_block(&request, now)
    }

    /// Replace the active plan after a fitness change and re-pace its open workouts
    ///
    /// Incomplete workouts of the previous plan move to the new plan with paces
    /// from the new VDOT; completed workouts stay with the old plan as history.
    /// The plan switch and the move are stored in one repository call, so on a
    /// storage failure the previous plan stays active with its workouts.
    /// Returns the new plan with the re-paced workouts.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NoActivePlan` when the user has no active plan,
    /// `ServiceError::Plan` for rejected requests and `ServiceError::Collaborator`
    /// for storage failures
    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub fn apply_vdot_change(
        &self,
        request: &PlanGenerationRequest,
        now: DateTime<Utc>,
    ) -> ServiceResult<TrainingBlock> {
        let previous = self
            .repository
            .active_plan(&request.user_id)?
            .ok_or_else(|| ServiceError::NoActivePlan(request.user_id.clone()))?;
        let previous_id = previous.id;
        let previous_vdot = previous.vdot;

        let supersession = self.builder.supersede_plan(previous, request, now)?;
        let open_workouts = match previous_id {
            Some(plan_id) => self.repository.incomplete_workouts(plan_id)?,
            None => Vec::new(),
        };
        let workouts = PaceUpdater::for_plan(&supersession.plan, self.builder.periodization())
            .apply(&open_workouts);
        let stored = self.repository.activate_block(TrainingBlock {
            plan: supersession.plan,
            workouts,
        })?;

        PlanLogger::log_vdot_change(
            &stored.plan.user_id,
            previous_vdot,
            stored.plan.vdot,
            stored.workouts.len(),
        );
        Ok(stored)
    }
}

// ABOUTME: Persistence and run-history collaborator contracts for the planning engine
// ABOUTME: Repository and history traits with RwLock-guarded in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach

//! # Collaborators
//!
//! The engine never performs I/O. Storage and run logging sit behind the
//! traits in this module so callers can plug in a database, a remote service
//! or the in-memory implementations used by the CLI and tests.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;
use stride_core::models::{RunRecord, TrainingBlock, TrainingPlan, Workout};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Collaborator failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// Referenced record does not exist
    #[error("{resource} '{id}' not found")]
    NotFound {
        /// Kind of record
        resource: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// A writer panicked while holding the storage lock
    #[error("Storage lock poisoned")]
    LockPoisoned,

    /// Backing service could not be reached
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),
}

impl CollaboratorError {
    /// Create a not-found error
    #[must_use]
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

impl<T> From<PoisonError<T>> for CollaboratorError {
    fn from(_: PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}

/// Result type alias for collaborator calls
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Storage for plans and their workouts
pub trait PlanRepository: Send + Sync {
    /// The user's active plan, if any
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` if storage is unavailable
    fn active_plan(&self, user_id: &str) -> CollaboratorResult<Option<TrainingPlan>>;

    /// Deactivate the user's current plan and store `plan` as active in one step
    ///
    /// Returns the stored plan with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` if storage is unavailable
    fn replace_active_plan(&self, plan: TrainingPlan) -> CollaboratorResult<TrainingPlan>;

    /// Mark a plan inactive without deleting it
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::NotFound` if the plan does not exist
    fn soft_delete_plan(&self, plan_id: Uuid) -> CollaboratorResult<()>;

    /// Store new workouts, returning them with assigned ids
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` if storage is unavailable
    fn insert_workouts(&self, workouts: Vec<Workout>) -> CollaboratorResult<Vec<Workout>>;

    /// Incomplete workouts of a plan, ordered by week then day
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` if storage is unavailable
    fn incomplete_workouts(&self, plan_id: Uuid) -> CollaboratorResult<Vec<Workout>>;

    /// Overwrite previously stored workouts
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::NotFound` if a workout was never stored
    fn update_workouts(&self, workouts: &[Workout]) -> CollaboratorResult<()>;

    /// Store `block.plan` as the user's active plan and attach `block.workouts` to it
    ///
    /// Deactivating the previous plan, storing the new one and writing the
    /// workouts happen as one step: on error nothing has changed. Workouts
    /// without an id are inserted; workouts with an id must already be stored
    /// and are overwritten, which moves them off their previous plan. Returns
    /// the stored plan and workouts with ids assigned and `plan_id` set.
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::NotFound` if a workout id was never stored
    fn activate_block(&self, block: TrainingBlock) -> CollaboratorResult<TrainingBlock>;
}

/// Source of the user's logged runs
pub trait RunHistoryProvider: Send + Sync {
    /// Runs logged on or after `since`
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError` if the history cannot be read
    fn recent_runs(&self, user_id: &str, since: NaiveDate) -> CollaboratorResult<Vec<RunRecord>>;
}

#[derive(Debug, Default)]
struct RepositoryState {
    plans: HashMap<Uuid, TrainingPlan>,
    workouts: HashMap<Uuid, Workout>,
}

impl RepositoryState {
    fn activate_plan(&mut self, plan: TrainingPlan) -> TrainingPlan {
        let replaced_at = plan.updated_at;
        for existing in self.plans.values_mut() {
            if existing.is_active && existing.user_id == plan.user_id {
                existing.is_active = false;
                existing.updated_at = replaced_at;
            }
        }

        let id = plan.id.unwrap_or_else(Uuid::new_v4);
        let stored = TrainingPlan {
            is_active: true,
            ..plan.with_id(id)
        };
        self.plans.insert(id, stored.clone());
        debug!(user_id = %stored.user_id, plan_id = %id, "Stored active training plan");
        stored
    }

    fn ensure_stored<'a>(
        &self,
        workouts: impl IntoIterator<Item = &'a Workout>,
    ) -> CollaboratorResult<()> {
        for workout in workouts {
            let known = workout
                .id
                .is_some_and(|id| self.workouts.contains_key(&id));
            if !known {
                return Err(CollaboratorError::not_found(
                    "workout",
                    workout.id.map_or_else(|| "unsaved".to_owned(), |id| id.to_string()),
                ));
            }
        }
        Ok(())
    }

    fn store_workout(&mut self, mut workout: Workout) -> Workout {
        let id = *workout.id.get_or_insert_with(Uuid::new_v4);
        self.workouts.insert(id, workout.clone());
        workout
    }
}

/// In-memory [`PlanRepository`]
///
/// A single `RwLock` guards plans and workouts, so replacing the active plan
/// is atomic with respect to every other call.
#[derive(Debug, Default)]
pub struct InMemoryPlanRepository {
    state: RwLock<RepositoryState>,
}

impl InMemoryPlanRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every plan stored for a user, oldest first
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::LockPoisoned` if a writer panicked
    pub fn plans_for_user(&self, user_id: &str) -> CollaboratorResult<Vec<TrainingPlan>> {
        let state = self.state.read()?;
        let mut plans: Vec<TrainingPlan> = state
            .plans
            .values()
            .filter(|plan| plan.user_id == user_id)
            .cloned()
            .collect();
        plans.sort_by_key(|plan| plan.created_at);
        Ok(plans)
    }

    /// Every workout stored for a plan, ordered by week then day
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::LockPoisoned` if a writer panicked
    pub fn workouts_for_plan(&self, plan_id: Uuid) -> CollaboratorResult<Vec<Workout>> {
        let state = self.state.read()?;
        Ok(Self::collect_workouts(&state, plan_id, |_| true))
    }

    /// Record a workout as completed, as the run-logging collaborator would
    ///
    /// # Errors
    ///
    /// Returns `CollaboratorError::NotFound` if the workout does not exist
    pub fn mark_completed(&self, workout_id: Uuid) -> CollaboratorResult<()> {
        let mut state = self.state.write()?;
        let workout = state
            .workouts
            .get_mut(&workout_id)
            .ok_or_else(|| CollaboratorError::not_found("workout", workout_id))?;
        workout.completed = true;
        Ok(())
    }

    fn collect_workouts(
        state: &RepositoryState,
        plan_id: Uuid,
        keep: impl Fn(&Workout) -> bool,
    ) -> Vec<Workout> {
        let mut workouts: Vec<Workout> = state
            .workouts
            .values()
            .filter(|workout| workout.plan_id == Some(plan_id) && keep(workout))
            .cloned()
            .collect();
        workouts.sort_by_key(|workout| (workout.week, workout.day));
        workouts
    }
}

impl PlanRepository for InMemoryPlanRepository {
    fn active_plan(&self, user_id: &str) -> CollaboratorResult<Option<TrainingPlan>> {
        let state = self.state.read()?;
        Ok(state
            .plans
            .values()
            .find(|plan| plan.is_active && plan.user_id == user_id)
            .cloned())
    }

    fn replace_active_plan(&self, plan: TrainingPlan) -> CollaboratorResult<TrainingPlan> {
        let mut state = self.state.write()?;
        Ok(state.activate_plan(plan))
    }

    fn soft_delete_plan(&self, plan_id: Uuid) -> CollaboratorResult<()> {
        let mut state = self.state.write()?;
        let plan = state
            .plans
            .get_mut(&plan_id)
            .ok_or_else(|| CollaboratorError::not_found("plan", plan_id))?;
        plan.is_active = false;
        Ok(())
    }

    fn insert_workouts(&self, workouts: Vec<Workout>) -> CollaboratorResult<Vec<Workout>> {
        let mut state = self.state.write()?;
        Ok(workouts
            .into_iter()
            .map(|workout| state.store_workout(workout))
            .collect())
    }

    fn incomplete_workouts(&self, plan_id: Uuid) -> CollaboratorResult<Vec<Workout>> {
        let state = self.state.read()?;
        Ok(Self::collect_workouts(&state, plan_id, |workout| {
            !workout.completed
        }))
    }

    fn update_workouts(&self, workouts: &[Workout]) -> CollaboratorResult<()> {
        let mut state = self.state.write()?;
        state.ensure_stored(workouts)?;
        for workout in workouts {
            state.store_workout(workout.clone());
        }
        Ok(())
    }

    fn activate_block(&self, block: TrainingBlock) -> CollaboratorResult<TrainingBlock> {
        let mut state = self.state.write()?;
        state.ensure_stored(block.workouts.iter().filter(|workout| workout.id.is_some()))?;

        let plan = state.activate_plan(block.plan);
        let workouts = block
            .workouts
            .into_iter()
            .map(|mut workout| {
                workout.plan_id = plan.id;
                state.store_workout(workout)
            })
            .collect();
        Ok(TrainingBlock { plan, workouts })
    }
}

/// Fixed run history keyed by user
#[derive(Debug, Clone, Default)]
pub struct StaticRunHistory {
    runs: HashMap<String, Vec<RunRecord>>,
}

impl StaticRunHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add runs for a user
    #[must_use]
    pub fn with_runs(mut self, user_id: impl Into<String>, runs: Vec<RunRecord>) -> Self {
        self.runs.entry(user_id.into()).or_default().extend(runs);
        self
    }
}

impl RunHistoryProvider for StaticRunHistory {
    fn recent_runs(&self, user_id: &str, since: NaiveDate) -> CollaboratorResult<Vec<RunRecord>> {
        Ok(self
            .runs
            .get(user_id)
            .map(|runs| runs.iter().filter(|run| run.date >= since).copied().collect())
            .unwrap_or_default())
    }
}

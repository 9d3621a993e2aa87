//! In-memory ordered collection of workouts for the current session.

use crate::errors::{AppError, AppResult};
use crate::models::Workout;
use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a workout. Ids must be unique within the store.
    pub fn add(&mut self, workout: Workout) -> AppResult<()> {
        if self.contains(workout.id().as_str()) {
            return Err(AppError::DuplicateId(workout.id().to_string()));
        }
        self.workouts.push(workout);
        Ok(())
    }

    /// All workouts, in creation order.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<&Workout> {
        self.workouts
            .iter()
            .find(|w| w.id().as_str() == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Swap the whole content, used when loading from storage.
    /// The incoming sequence is checked first; on error the store is untouched.
    pub fn replace_all(&mut self, workouts: Vec<Workout>) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(workouts.len());
        for w in &workouts {
            if !seen.insert(w.id().as_str()) {
                return Err(AppError::DuplicateId(w.id().to_string()));
            }
        }
        self.workouts = workouts;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    fn contains(&self, id: &str) -> bool {
        self.workouts.iter().any(|w| w.id().as_str() == id)
    }
}

//! Serialization of the workout store into one key of a `KeyValueStore`.
//!
//! Only inputs are written. Labels and derived metrics are rebuilt on load,
//! so a record written by an older formula never carries a stale value.
//!
//! Loading never fails: an absent key is an empty history, an unreadable slot
//! is an empty history plus a diagnostic, and a bad record is dropped on its
//! own while every other record still loads.

use crate::core::store::WorkoutStore;
use crate::errors::AppResult;
use crate::models::workout::DEFAULT_LABEL_DATE_FORMAT;
use crate::models::{Activity, GeoPoint, Workout, WorkoutId, WorkoutKind};
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::fmt;

/// Default storage key.
pub const DEFAULT_STORAGE_KEY: &str = "workouts";

/// On-disk layout of one workout.
///
/// The aliases accept records written by the first web version of the app
/// (`coords`, `distance`, `duration`, `type`, `temp`, `climb`, `date`).
/// Its extra `pace`, `speed` and `description` fields are ignored.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredWorkout {
    id: String,
    #[serde(rename = "createdAtISO", alias = "date")]
    created_at: DateTime<Utc>,
    #[serde(alias = "coords")]
    location: [f64; 2],
    #[serde(alias = "distance")]
    distance_km: f64,
    #[serde(alias = "duration")]
    duration_min: f64,
    #[serde(alias = "type")]
    kind: WorkoutKind,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "temp")]
    cadence_steps_per_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "climb")]
    elevation_gain_m: Option<f64>,
}

impl From<&Workout> for StoredWorkout {
    fn from(w: &Workout) -> Self {
        let (cadence_steps_per_min, elevation_gain_m) = match w.activity() {
            Activity::Running {
                cadence_steps_per_min,
            } => (Some(cadence_steps_per_min), None),
            Activity::Cycling { elevation_gain_m } => (None, Some(elevation_gain_m)),
        };
        Self {
            id: w.id().to_string(),
            created_at: w.created_at(),
            location: w.location().into(),
            distance_km: w.distance_km(),
            duration_min: w.duration_min(),
            kind: w.kind(),
            cadence_steps_per_min,
            elevation_gain_m,
        }
    }
}

impl StoredWorkout {
    fn into_workout(self, label_date_format: &str) -> Result<Workout, String> {
        if self.id.trim().is_empty() {
            return Err("empty id".to_string());
        }

        let activity = match self.kind {
            WorkoutKind::Running => Activity::Running {
                cadence_steps_per_min: self
                    .cadence_steps_per_min
                    .ok_or("missing field `cadenceStepsPerMin`")?,
            },
            WorkoutKind::Cycling => Activity::Cycling {
                elevation_gain_m: self
                    .elevation_gain_m
                    .ok_or("missing field `elevationGainM`")?,
            },
        };

        let [lat, lng] = self.location;
        let location = GeoPoint::new(lat, lng).map_err(|e| e.to_string())?;
        Workout::with_identity(
            WorkoutId::from(self.id),
            self.created_at,
            location,
            self.distance_km,
            self.duration_min,
            activity,
            label_date_format,
        )
        .map_err(|e| e.to_string())
    }
}

/// Why a stored record (or the whole slot) was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageDefect {
    /// Position of the record in the stored array; `None` when the whole slot
    /// could not be read.
    pub record: Option<usize>,
    pub reason: String,
}

impl fmt::Display for StorageDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.record {
            Some(i) => write!(f, "record #{}: {}", i + 1, self.reason),
            None => write!(f, "{}", self.reason),
        }
    }
}

/// Result of `PersistenceAdapter::load`.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub workouts: Vec<Workout>,
    pub defects: Vec<StorageDefect>,
}

impl LoadOutcome {
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }

    fn corrupt(reason: String) -> Self {
        Self {
            workouts: Vec::new(),
            defects: vec![StorageDefect {
                record: None,
                reason,
            }],
        }
    }
}

pub struct PersistenceAdapter<K: KeyValueStore> {
    backend: K,
    key: String,
    label_date_format: String,
}

impl<K: KeyValueStore> PersistenceAdapter<K> {
    pub fn new(backend: K) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: K, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
            label_date_format: DEFAULT_LABEL_DATE_FORMAT.to_string(),
        }
    }

    /// Format used for the labels of reloaded workouts.
    pub fn label_date_format(mut self, format: &str) -> Self {
        self.label_date_format = format.to_string();
        self
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    /// Write the whole store under the key, replacing the previous value.
    pub fn save(&mut self, store: &WorkoutStore) -> AppResult<()> {
        let records: Vec<StoredWorkout> = store.all().iter().map(StoredWorkout::from).collect();
        let json = serde_json::to_string(&records)?;
        self.backend.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, workouts = records.len(), "saved workouts");
        Ok(())
    }

    pub fn load(&self) -> LoadOutcome {
        let outcome = self.read();
        for d in &outcome.defects {
            tracing::warn!(key = %self.key, defect = %d, "dropping stored workout data");
        }
        tracing::debug!(
            key = %self.key,
            loaded = outcome.workouts.len(),
            dropped = outcome.defects.len(),
            "loaded workouts"
        );
        outcome
    }

    /// Delete the key. Clearing the in-memory store is the caller's job.
    pub fn reset(&mut self) -> AppResult<()> {
        self.backend.remove(&self.key)?;
        tracing::info!(key = %self.key, "stored workouts removed");
        Ok(())
    }

    fn read(&self) -> LoadOutcome {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::default(),
            Err(e) => return LoadOutcome::corrupt(format!("cannot read storage: {e}")),
        };

        // a stored `null` counts as an absent key
        let records = match serde_json::from_str::<Option<Vec<JsonValue>>>(&raw) {
            Ok(Some(records)) => records,
            Ok(None) => return LoadOutcome::default(),
            Err(e) => return LoadOutcome::corrupt(format!("not a JSON array of workouts: {e}")),
        };

        let mut outcome = LoadOutcome::default();
        let mut seen = HashSet::new();

        for (i, value) in records.into_iter().enumerate() {
            let parsed = serde_json::from_value::<StoredWorkout>(value)
                .map_err(|e| e.to_string())
                .and_then(|s| s.into_workout(&self.label_date_format));

            match parsed {
                Ok(w) if !seen.insert(w.id().to_string()) => {
                    outcome.defects.push(StorageDefect {
                        record: Some(i),
                        reason: format!("duplicate id {}", w.id()),
                    });
                }
                Ok(w) => outcome.workouts.push(w),
                Err(reason) => outcome.defects.push(StorageDefect {
                    record: Some(i),
                    reason,
                }),
            }
        }

        outcome
    }
}

use super::{kind::WorkoutKind, location::GeoPoint};
use crate::errors::ValidationError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use std::fmt;
use uuid::Uuid;

/// Default chrono format for the date part of a workout label (dd.mm.yyyy).
pub const DEFAULT_LABEL_DATE_FORMAT: &str = "%d.%m.%Y";

/// Opaque workout identifier. Unique within one store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Fresh random id (UUID v4, simple form).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for WorkoutId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for WorkoutId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind-specific input of a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running { cadence_steps_per_min: f64 },
    Cycling { elevation_gain_m: f64 },
}

impl Activity {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Activity::Running {
                cadence_steps_per_min,
            } => positive("cadence", cadence_steps_per_min),
            Activity::Cycling { elevation_gain_m } => {
                non_negative("elevation gain", elevation_gain_m)
            }
        }
    }
}

/// Metric computed from the stored inputs. Never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedMetric {
    PaceMinPerKm(f64),
    SpeedKmPerH(f64),
}

impl DerivedMetric {
    pub fn value(&self) -> f64 {
        match *self {
            DerivedMetric::PaceMinPerKm(v) | DerivedMetric::SpeedKmPerH(v) => v,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            DerivedMetric::PaceMinPerKm(_) => "min/km",
            DerivedMetric::SpeedKmPerH(_) => "km/h",
        }
    }
}

/// One logged activity. Immutable once constructed: fields are private and
/// only exposed through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    location: GeoPoint,
    distance_km: f64,
    duration_min: f64,
    activity: Activity,
    label: String,
}

impl Workout {
    /// New workout with a fresh id, the current time and the default label format.
    pub fn new(
        location: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        activity: Activity,
    ) -> Result<Self, ValidationError> {
        Self::with_identity(
            WorkoutId::generate(),
            Utc::now(),
            location,
            distance_km,
            duration_min,
            activity,
            DEFAULT_LABEL_DATE_FORMAT,
        )
    }

    pub fn running(
        location: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        cadence_steps_per_min: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(
            location,
            distance_km,
            duration_min,
            Activity::Running {
                cadence_steps_per_min,
            },
        )
    }

    pub fn cycling(
        location: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(
            location,
            distance_km,
            duration_min,
            Activity::Cycling { elevation_gain_m },
        )
    }

    /// Full constructor. Also used when rebuilding workouts read back from
    /// storage, so that loaded records pass the same checks as new ones.
    pub fn with_identity(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        location: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        activity: Activity,
        label_date_format: &str,
    ) -> Result<Self, ValidationError> {
        positive("distance", distance_km)?;
        positive("duration", duration_min)?;
        activity.validate()?;

        let date_format = if is_valid_date_format(label_date_format) {
            label_date_format
        } else {
            DEFAULT_LABEL_DATE_FORMAT
        };
        let label = format!(
            "{} {}",
            activity.kind().display_name(),
            created_at.with_timezone(&Local).format(date_format)
        );

        Ok(Self {
            id,
            created_at,
            location,
            distance_km,
            duration_min,
            activity,
            label,
        })
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn derived_metric(&self) -> DerivedMetric {
        match self.activity {
            Activity::Running { .. } => {
                DerivedMetric::PaceMinPerKm(self.duration_min / self.distance_km)
            }
            Activity::Cycling { .. } => {
                DerivedMetric::SpeedKmPerH(self.distance_km / self.duration_min * 60.0)
            }
        }
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.derived_metric() {
            DerivedMetric::PaceMinPerKm(v) => Some(v),
            DerivedMetric::SpeedKmPerH(_) => None,
        }
    }

    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.derived_metric() {
            DerivedMetric::SpeedKmPerH(v) => Some(v),
            DerivedMetric::PaceMinPerKm(_) => None,
        }
    }
}

/// True when `format` only holds specifiers chrono understands.
/// Formatting with an unknown specifier would panic.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

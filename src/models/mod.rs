pub mod kind;
pub mod location;
pub mod workout;

pub use kind::WorkoutKind;
pub use location::GeoPoint;
pub use workout::{Activity, DerivedMetric, Workout, WorkoutId};

//! Presentation-neutral description of a workout, handed to the map and the
//! sidebar collaborators.

use crate::models::{Activity, DerivedMetric, Workout, WorkoutKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWorkout {
    pub id: String,
    pub kind: WorkoutKind,
    pub title: String,
    pub icon: &'static str,
    pub style_class: String,
    pub popup_content: String,
    pub details: Vec<DetailRow>,
}

impl RenderedWorkout {
    pub fn from_workout(w: &Workout) -> Self {
        let kind = w.kind();
        let mut details = vec![
            DetailRow {
                icon: kind.icon(),
                value: format_number(w.distance_km()),
                unit: "km",
            },
            DetailRow {
                icon: "⏱",
                value: format_number(w.duration_min()),
                unit: "min",
            },
        ];

        let metric = w.derived_metric();
        let metric_icon = match metric {
            DerivedMetric::PaceMinPerKm(_) => "📏",
            DerivedMetric::SpeedKmPerH(_) => "💨",
        };
        details.push(DetailRow {
            icon: metric_icon,
            value: format!("{:.2}", metric.value()),
            unit: metric.unit(),
        });

        details.push(match w.activity() {
            Activity::Running {
                cadence_steps_per_min,
            } => DetailRow {
                icon: "🦶",
                value: format_number(cadence_steps_per_min),
                unit: "spm",
            },
            Activity::Cycling { elevation_gain_m } => DetailRow {
                icon: "⛰",
                value: format_number(elevation_gain_m),
                unit: "m",
            },
        });

        Self {
            id: w.id().to_string(),
            kind,
            title: w.label().to_string(),
            icon: kind.icon(),
            style_class: kind.popup_class(),
            popup_content: format!("{} {}", kind.icon(), w.label()),
            details,
        }
    }
}

/// Plain number as typed: `5` stays `5`, `7.25` stays `7.25`.
fn format_number(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    #[test]
    fn running_rows() {
        let here = GeoPoint::new(50.0, 12.0).unwrap();
        let w = Workout::running(here, 5.0, 32.5, 170.0).unwrap();
        let r = RenderedWorkout::from_workout(&w);

        assert_eq!(r.style_class, "running-popup");
        assert_eq!(r.popup_content, format!("🏃 {}", w.label()));
        let values: Vec<&str> = r.details.iter().map(|d| d.value.as_str()).collect();
        let units: Vec<&str> = r.details.iter().map(|d| d.unit).collect();
        assert_eq!(values, ["5", "32.5", "6.50", "170"]);
        assert_eq!(units, ["km", "min", "min/km", "spm"]);
    }

    #[test]
    fn cycling_rows() {
        let here = GeoPoint::new(50.0, 12.0).unwrap();
        let w = Workout::cycling(here, 20.0, 60.0, 300.0).unwrap();
        let r = RenderedWorkout::from_workout(&w);

        assert_eq!(r.kind, WorkoutKind::Cycling);
        assert_eq!(r.style_class, "cycling-popup");
        assert_eq!(r.details[2].value, "20.00");
        assert_eq!(r.details[2].unit, "km/h");
        assert_eq!(r.details[3].value, "300");
        assert_eq!(r.details[3].unit, "m");
    }
}

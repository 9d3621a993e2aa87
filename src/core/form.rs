//! Raw form values as typed by the user, and their conversion to workout inputs.

use crate::errors::ValidationError;
use crate::models::{Activity, WorkoutKind};

/// What the form layer hands over on submit: the selected kind plus the
/// untouched text of every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

/// Numeric inputs extracted from a submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedInput {
    pub distance_km: f64,
    pub duration_min: f64,
    pub activity: Activity,
}

impl FormSubmission {
    pub fn new(kind: WorkoutKind) -> Self {
        Self {
            kind,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }

    pub fn distance(mut self, raw: impl Into<String>) -> Self {
        self.distance = raw.into();
        self
    }

    pub fn duration(mut self, raw: impl Into<String>) -> Self {
        self.duration = raw.into();
        self
    }

    pub fn cadence(mut self, raw: impl Into<String>) -> Self {
        self.cadence = raw.into();
        self
    }

    pub fn elevation(mut self, raw: impl Into<String>) -> Self {
        self.elevation = raw.into();
        self
    }

    /// Convert the fields relevant to `kind` to numbers.
    ///
    /// Only the conversion happens here; range checks are done by the workout
    /// constructor. The field belonging to the other kind is ignored.
    pub fn parse(&self) -> Result<ParsedInput, ValidationError> {
        let distance_km = parse_number("distance", &self.distance)?;
        let duration_min = parse_number("duration", &self.duration)?;
        let activity = match self.kind {
            WorkoutKind::Running => Activity::Running {
                cadence_steps_per_min: parse_number("cadence", &self.cadence)?,
            },
            WorkoutKind::Cycling => Activity::Cycling {
                elevation_gain_m: parse_number("elevation gain", &self.elevation)?,
            },
        };
        Ok(ParsedInput {
            distance_km,
            duration_min,
            activity,
        })
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_running_fields() {
        let form = FormSubmission::new(WorkoutKind::Running)
            .distance(" 5 ")
            .duration("30")
            .cadence("170")
            .elevation("not used");
        assert_eq!(
            form.parse().unwrap(),
            ParsedInput {
                distance_km: 5.0,
                duration_min: 30.0,
                activity: Activity::Running {
                    cadence_steps_per_min: 170.0
                },
            }
        );
    }

    #[test]
    fn parses_cycling_fields() {
        let form = FormSubmission::new(WorkoutKind::Cycling)
            .distance("20.5")
            .duration("60")
            .elevation("0");
        let parsed = form.parse().unwrap();
        assert_eq!(
            parsed.activity,
            Activity::Cycling {
                elevation_gain_m: 0.0
            }
        );
    }

    #[test]
    fn empty_or_text_is_not_a_number() {
        let form = FormSubmission::new(WorkoutKind::Running)
            .distance("")
            .duration("30")
            .cadence("170");
        assert!(matches!(
            form.parse(),
            Err(ValidationError::NotANumber {
                field: "distance",
                ..
            })
        ));

        let form = form.distance("5").cadence("fast");
        assert!(matches!(
            form.parse(),
            Err(ValidationError::NotANumber {
                field: "cadence",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_text_parses_and_is_left_to_validation() {
        let form = FormSubmission::new(WorkoutKind::Running)
            .distance("inf")
            .duration("NaN")
            .cadence("170");
        let parsed = form.parse().unwrap();
        assert!(parsed.distance_km.is_infinite());
        assert!(parsed.duration_min.is_nan());
    }
}

use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ConfigGeolocator, FormSubmission, SubmitOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::GeoPoint;
use crate::ui::messages::success;

/// Log a workout: pick the location, fill the form, submit.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        lat,
        lng,
        kind,
        distance,
        duration,
        cadence,
        elevation,
    } = cmd
    {
        //
        // 1. Load the stored history without echoing it
        //
        let mut session = open_session(cfg, true)?;

        //
        // 2. Map center: the configured home, or the picked point itself
        //
        let center = match cfg.home_location {
            Some(home) => home,
            None => GeoPoint::new(*lat, *lng)?,
        };
        session.locate(&mut ConfigGeolocator::new(Some(center)));
        session.view_mut().set_muted(false);

        //
        // 3. User events
        //
        session.location_picked(*lat, *lng);
        session.kind_changed(*kind);

        let form = FormSubmission::new(*kind)
            .distance(distance.as_str())
            .duration(duration.as_str())
            .cadence(cadence.as_str())
            .elevation(elevation.as_str());

        match session.submit(&form)? {
            SubmitOutcome::Created(id) => {
                success(format!("Workout {id} saved."));
            }
            SubmitOutcome::Rejected(e) => return Err(AppError::Validation(e)),
            SubmitOutcome::Ignored => {
                return Err(AppError::NotRecorded(format!(
                    "no usable location at ({lat}, {lng})"
                )));
            }
        }
    }

    Ok(())
}

//! Session controller: turns user events into store mutations, persistence
//! and render requests.
//!
//! ```text
//!            location picked                 submit (invalid)
//!   Idle ─────────────────────▶ AwaitingInput ◀──────────┐
//!    ▲                              │   │                │
//!    │     submit (valid) / cancel  │   └────────────────┘
//!    └──────────────────────────────┘
//! ```
//!
//! Selection, kind changes, reset and the geolocation callbacks are accepted
//! in any state. Every handler runs to completion before the next one.

use crate::core::form::FormSubmission;
use crate::core::persistence::{LoadOutcome, PersistenceAdapter};
use crate::core::render::RenderedWorkout;
use crate::core::store::WorkoutStore;
use crate::core::view::Presentation;
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::workout::DEFAULT_LABEL_DATE_FORMAT;
use crate::models::{GeoPoint, Workout, WorkoutId, WorkoutKind};
use crate::storage::KeyValueStore;
use chrono::Utc;

pub const DEFAULT_ZOOM: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    Idle,
    AwaitingInput { pending: GeoPoint },
}

/// Whether the map can be used, which depends on the one-shot geolocation
/// request made at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapStatus {
    /// No answer from the geolocation source yet.
    Waiting,
    Ready { center: GeoPoint },
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub zoom: u8,
    pub label_date_format: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            label_date_format: DEFAULT_LABEL_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(WorkoutId),
    /// Bad input. The form is still open and the pending location is kept.
    Rejected(ValidationError),
    /// No location was picked, or the store refused the workout.
    Ignored,
}

/// Mutable state of one session. Owned by the controller and by nothing else.
#[derive(Debug)]
pub struct SessionContext {
    pub store: WorkoutStore,
    pub state: SessionState,
    pub map: MapStatus,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            store: WorkoutStore::new(),
            state: SessionState::Idle,
            map: MapStatus::Waiting,
        }
    }
}

pub struct SessionController<K: KeyValueStore, P: Presentation> {
    persistence: PersistenceAdapter<K>,
    view: P,
    settings: SessionSettings,
    ctx: SessionContext,
}

impl<K: KeyValueStore, P: Presentation> SessionController<K, P> {
    pub fn new(persistence: PersistenceAdapter<K>, view: P, settings: SessionSettings) -> Self {
        let persistence = persistence.label_date_format(&settings.label_date_format);
        Self {
            persistence,
            view,
            settings,
            ctx: SessionContext::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.ctx.state
    }

    pub fn map_status(&self) -> MapStatus {
        self.ctx.map
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.ctx.store
    }

    pub fn view(&self) -> &P {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut P {
        &mut self.view
    }

    pub fn persistence(&self) -> &PersistenceAdapter<K> {
        &self.persistence
    }

    /// Load the stored history and render it, in stored order.
    /// Returns the number of workouts loaded.
    pub fn startup(&mut self) -> usize {
        let LoadOutcome { workouts, defects } = self.persistence.load();

        if !defects.is_empty() {
            let list: Vec<String> = defects.iter().map(ToString::to_string).collect();
            let err = AppError::StorageCorrupt(format!(
                "{} entr{} skipped: {}",
                defects.len(),
                if defects.len() == 1 { "y" } else { "ies" },
                list.join("; ")
            ));
            self.view.diagnostic(&err.to_string());
        }

        if let Err(e) = self.ctx.store.replace_all(workouts) {
            tracing::error!(err = %e, "stored workouts rejected by the store");
            self.view.diagnostic(&e.to_string());
        }

        for w in self.ctx.store.all() {
            render(&mut self.view, &self.ctx.map, w);
        }

        tracing::debug!(workouts = self.ctx.store.len(), "session started");
        self.ctx.store.len()
    }

    /// Success callback of the geolocation request.
    pub fn position_acquired(&mut self, position: GeoPoint) {
        let was_ready = matches!(self.ctx.map, MapStatus::Ready { .. });
        self.ctx.map = MapStatus::Ready { center: position };
        self.view.center_on(position, self.settings.zoom, false);

        // markers of workouts loaded before the map existed
        if !was_ready {
            for w in self.ctx.store.all() {
                let r = RenderedWorkout::from_workout(w);
                self.view
                    .add_marker(w.location(), &r.popup_content, &r.style_class);
            }
        }
        tracing::debug!(%position, "map ready");
    }

    /// Failure callback of the geolocation request.
    pub fn position_failed(&mut self, reason: &str) {
        if self.ctx.map == MapStatus::Unavailable {
            return;
        }
        self.ctx.map = MapStatus::Unavailable;
        let err = AppError::GeolocationUnavailable(reason.to_string());
        tracing::warn!(err = %err, "map disabled");
        self.view.alert(&err.to_string());
    }

    pub fn location_picked(&mut self, lat: f64, lng: f64) {
        if !matches!(self.ctx.map, MapStatus::Ready { .. }) {
            tracing::warn!(lat, lng, "location picked without a usable map, ignored");
            return;
        }

        let pending = match GeoPoint::new(lat, lng) {
            Ok(p) => p,
            Err(e) => {
                self.view.alert(&e.to_string());
                return;
            }
        };

        if let SessionState::AwaitingInput { pending: previous } = self.ctx.state {
            tracing::debug!(%previous, %pending, "pending location replaced");
        }
        self.ctx.state = SessionState::AwaitingInput { pending };
        self.view.set_visible(true);
    }

    pub fn kind_changed(&mut self, kind: WorkoutKind) {
        self.view.show_fields_for(kind);
    }

    /// Validate the form and, when valid, create, store, save and render the
    /// workout.
    ///
    /// A storage failure is returned as an error, but the workout stays in
    /// the session and is rendered; the next successful save persists it.
    pub fn submit(&mut self, form: &FormSubmission) -> AppResult<SubmitOutcome> {
        let SessionState::AwaitingInput { pending } = self.ctx.state else {
            tracing::debug!("submit without a picked location, ignored");
            return Ok(SubmitOutcome::Ignored);
        };

        let workout = match self.build_workout(pending, form) {
            Ok(w) => w,
            Err(e) => {
                tracing::debug!(err = %e, "workout rejected");
                self.view.alert(&e.to_string());
                return Ok(SubmitOutcome::Rejected(e));
            }
        };

        let id = workout.id().clone();
        if let Err(e) = self.ctx.store.add(workout) {
            tracing::error!(err = %e, "store refused a new workout");
            return Ok(SubmitOutcome::Ignored);
        }

        let saved = self.persistence.save(&self.ctx.store);

        if let Ok(w) = self.ctx.store.find_by_id(id.as_str()) {
            render(&mut self.view, &self.ctx.map, w);
        }
        self.view.clear_fields();
        self.view.set_visible(false);
        self.ctx.state = SessionState::Idle;
        tracing::debug!(%id, "workout created");

        saved?;
        Ok(SubmitOutcome::Created(id))
    }

    pub fn cancel(&mut self) {
        if self.ctx.state != SessionState::Idle {
            self.ctx.state = SessionState::Idle;
            self.view.set_visible(false);
            tracing::debug!("pending location discarded");
        }
    }

    /// Center the map on a workout chosen in the sidebar or on the map.
    /// Returns false when nothing happened.
    pub fn select(&mut self, id: &str) -> bool {
        let location = match self.ctx.store.find_by_id(id) {
            Ok(w) => w.location(),
            Err(e) => {
                tracing::warn!(err = %e, "selection ignored");
                return false;
            }
        };
        if !matches!(self.ctx.map, MapStatus::Ready { .. }) {
            tracing::warn!(id, "selection without a usable map, ignored");
            return false;
        }
        self.view.center_on(location, self.settings.zoom, true);
        true
    }

    /// Drop the stored history and the session's workouts together.
    pub fn reset(&mut self) -> AppResult<()> {
        self.persistence.reset()?;
        self.ctx.store.clear();
        self.ctx.state = SessionState::Idle;
        self.view.reload();
        Ok(())
    }

    fn build_workout(
        &self,
        pending: GeoPoint,
        form: &FormSubmission,
    ) -> Result<Workout, ValidationError> {
        let input = form.parse()?;
        Workout::with_identity(
            WorkoutId::generate(),
            Utc::now(),
            pending,
            input.distance_km,
            input.duration_min,
            input.activity,
            &self.settings.label_date_format,
        )
    }
}

fn render<P: Presentation>(view: &mut P, map: &MapStatus, w: &Workout) {
    let r = RenderedWorkout::from_workout(w);
    if matches!(map, MapStatus::Ready { .. }) {
        view.add_marker(w.location(), &r.popup_content, &r.style_class);
    }
    view.append_entry(&r);
}

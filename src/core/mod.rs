//! Workout session logic: store, persistence, form handling and the
//! controller that ties them to the presentation collaborators.

pub mod form;
pub mod geolocation;
pub mod persistence;
pub mod render;
pub mod session;
pub mod store;
pub mod view;

pub use form::FormSubmission;
pub use geolocation::{ConfigGeolocator, Geolocator};
pub use persistence::{LoadOutcome, PersistenceAdapter, StorageDefect};
pub use render::RenderedWorkout;
pub use session::{SessionController, SessionSettings, SessionState, SubmitOutcome};
pub use store::WorkoutStore;
pub use view::{MapView, Notifier, Presentation, Sidebar, WorkoutForm};

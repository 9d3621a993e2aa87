//! Contracts the session controller expects from the presentation layer.
//!
//! The controller never draws anything itself: it asks these collaborators to
//! do so. The terminal host implements them in `ui::terminal`; tests use a
//! recorder.

use crate::core::render::RenderedWorkout;
use crate::models::{GeoPoint, WorkoutKind};

pub trait MapView {
    fn add_marker(&mut self, location: GeoPoint, popup_content: &str, style_class: &str);
    fn center_on(&mut self, location: GeoPoint, zoom: u8, animate: bool);
}

pub trait WorkoutForm {
    fn clear_fields(&mut self);
    fn set_visible(&mut self, visible: bool);
    /// Show the kind-specific input (cadence or elevation) for `kind`.
    fn show_fields_for(&mut self, kind: WorkoutKind);
}

pub trait Sidebar {
    fn append_entry(&mut self, entry: &RenderedWorkout);
}

pub trait Notifier {
    /// Message the user has to acknowledge (bad input, missing location).
    fn alert(&mut self, message: &str);
    /// Non-blocking diagnostic (dropped records and similar).
    fn diagnostic(&mut self, message: &str);
}

/// Everything the controller drives, in one place.
pub trait Presentation: MapView + WorkoutForm + Sidebar + Notifier {
    /// Rebuild the whole presentation from scratch (after a reset).
    fn reload(&mut self);
}

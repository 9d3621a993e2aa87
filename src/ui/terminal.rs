//! Terminal rendition of the map, the form and the sidebar.

use crate::core::render::RenderedWorkout;
use crate::core::view::{MapView, Notifier, Presentation, Sidebar, WorkoutForm};
use crate::models::{GeoPoint, WorkoutKind};
use crate::ui::messages::{error, header, info, warning};
use crate::utils::formatting::{bold, pad_right};

const TITLE_WIDTH: usize = 28;

#[derive(Debug, Default)]
pub struct TerminalView {
    /// When set, map and sidebar output is suppressed. Alerts and
    /// diagnostics are always printed.
    muted: bool,
    /// Sidebar entries printed since the last reload.
    entries: usize,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}

impl MapView for TerminalView {
    fn add_marker(&mut self, location: GeoPoint, popup_content: &str, style_class: &str) {
        if self.muted {
            return;
        }
        println!("📍 {location} {popup_content} [{style_class}]");
    }

    fn center_on(&mut self, location: GeoPoint, zoom: u8, animate: bool) {
        if self.muted {
            return;
        }
        let how = if animate { ", animated" } else { "" };
        println!("🗺️  Map centered on {location} (zoom {zoom}{how})");
    }
}

/// The terminal form is the `add` command line itself: it keeps no field
/// state, so these requests are only traced.
impl WorkoutForm for TerminalView {
    fn clear_fields(&mut self) {
        tracing::debug!("form fields cleared");
    }

    fn set_visible(&mut self, visible: bool) {
        tracing::debug!(visible, "form visibility");
    }

    fn show_fields_for(&mut self, kind: WorkoutKind) {
        let field = match kind {
            WorkoutKind::Running => "cadence",
            WorkoutKind::Cycling => "elevation",
        };
        tracing::debug!(%kind, field, "form fields switched");
    }
}

impl Sidebar for TerminalView {
    fn append_entry(&mut self, entry: &RenderedWorkout) {
        if self.muted {
            return;
        }
        if self.entries == 0 {
            header("Workouts");
        }
        self.entries += 1;

        let title = format!("{} {}", entry.icon, entry.title);
        println!("{} {}", bold(&pad_right(&title, TITLE_WIDTH)), entry.id);

        let details: Vec<String> = entry
            .details
            .iter()
            .map(|d| format!("{} {} {}", d.icon, d.value, d.unit))
            .collect();
        println!("   {}", details.join("   "));
    }
}

impl Notifier for TerminalView {
    fn alert(&mut self, message: &str) {
        error(message);
    }

    fn diagnostic(&mut self, message: &str) {
        warning(message);
    }
}

impl Presentation for TerminalView {
    fn reload(&mut self) {
        self.entries = 0;
        info("Workout list cleared.");
    }
}

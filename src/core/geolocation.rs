//! One-shot position request made when a session starts.

use crate::core::session::SessionController;
use crate::core::view::Presentation;
use crate::models::GeoPoint;
use crate::storage::KeyValueStore;

pub trait Geolocator {
    /// Current position, or a human-readable reason why it is unknown.
    fn current_position(&mut self) -> Result<GeoPoint, String>;
}

/// Fixed position taken from the configuration file.
#[derive(Debug, Clone, Copy)]
pub struct ConfigGeolocator {
    home: Option<GeoPoint>,
}

impl ConfigGeolocator {
    pub fn new(home: Option<GeoPoint>) -> Self {
        Self { home }
    }
}

impl Geolocator for ConfigGeolocator {
    fn current_position(&mut self) -> Result<GeoPoint, String> {
        self.home
            .ok_or_else(|| "no home_location set in the configuration file".to_string())
    }
}

impl<K: KeyValueStore, P: Presentation> SessionController<K, P> {
    /// Ask `geo` for a position and feed the answer to the matching callback.
    pub fn locate<G: Geolocator>(&mut self, geo: &mut G) {
        match geo.current_position() {
            Ok(p) => self.position_acquired(p),
            Err(reason) => self.position_failed(&reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_geolocator_reports_missing_home() {
        let mut geo = ConfigGeolocator::new(None);
        let err = geo.current_position().unwrap_err();
        assert!(err.contains("home_location"));

        let home = GeoPoint::new(45.0, 9.0).unwrap();
        let mut geo = ConfigGeolocator::new(Some(home));
        assert_eq!(geo.current_position(), Ok(home));
    }
}

use std::{f64::consts::FRAC_PI_4, fmt, rc::Rc};

use serde::{Deserialize, Serialize};

/// A "part" of a location
pub type LocationComponent = f64;

/// Mean radius of the earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Some location in the world as gotten from a GPS fix
pub struct Location {
    /// Latitude in degrees
    pub latitude: LocationComponent,
    /// Longitude in degrees
    pub longitude: LocationComponent,
}

impl Location {
    pub const fn new(latitude: LocationComponent, longitude: LocationComponent) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Haversine distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Location) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Compass bearing from this location to `other` in degrees within `(-180, 180]`, where 0 is
    /// north and positive values turn clockwise.
    ///
    /// This is the constant-course (rhumb line) bearing. Building footprints have edges running
    /// exactly north-south and east-west, which keeps them rectangular on the Mercator plane
    /// where constant-course lines are straight.
    pub fn bearing_to(&self, other: &Location) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlon = normalize_degrees(other.longitude - self.longitude).to_radians();

        let dpsi = ((lat2 / 2.0 + FRAC_PI_4).tan() / (lat1 / 2.0 + FRAC_PI_4).tan()).ln();

        dlon.atan2(dpsi).to_degrees()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Wraps an angle in degrees into `[-180, 180]`. Angles already in range come back untouched.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped < -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Discrete change reported by an [OrientationProvider]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrientationEvent {
    /// The compass heading changed
    OrientationChanged,
    /// A new GPS fix arrived (or the fix was lost)
    LocationChanged,
    /// The compass accuracy changed, check [OrientationProvider::has_interference]
    AccuracyChanged,
}

/// Receives events from an [OrientationProvider]
pub trait OrientationListener {
    fn on_orientation_event(&self, event: OrientationEvent);
}

/// Source of GPS fixes and compass headings.
///
/// Implementations must deliver events from a single thread of control, one at a time.
pub trait OrientationProvider {
    /// Whether a GPS fix is currently available
    fn has_location(&self) -> bool;
    /// The most recent GPS fix, if any
    fn location(&self) -> Option<Location>;
    /// Compass heading in degrees within `[0, 360)`
    fn heading(&self) -> f32;
    /// Whether the compass currently reports magnetic interference
    fn has_interference(&self) -> bool;
    /// Begin listening to the underlying sensors
    fn start(&self);
    /// Stop listening to the underlying sensors
    fn stop(&self);
    fn add_on_changed_listener(&self, listener: Rc<dyn OrientationListener>);
    fn remove_on_changed_listener(&self, listener: &Rc<dyn OrientationListener>);
}

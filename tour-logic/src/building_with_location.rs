use std::{fmt, sync::Arc};

use serde::Serialize;

use crate::{building::Building, location::Location};

/// A [Building] along with how far away and how far off the user's heading it was at one fix.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingWithLocation {
    building: Arc<Building>,
    /// Kilometers from the user to the closest point of the building
    distance_km: f64,
    /// 0 means directly in front, negative is to the left, positive to the right
    heading_offset_deg: f64,
}

impl BuildingWithLocation {
    pub fn new(building: Arc<Building>, location: &Location, heading: f64) -> Self {
        let footprint = building.location();
        let closest_point = footprint.find_closest_point_within(location);
        let distance_km = location.distance_km(&closest_point);
        let heading_offset_deg = footprint.compute_heading_offset(location, heading);

        Self {
            building,
            distance_km,
            heading_offset_deg,
        }
    }

    pub fn building(&self) -> &Arc<Building> {
        &self.building
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn heading_offset_deg(&self) -> f64 {
        self.heading_offset_deg
    }

    pub(crate) fn abs_offset(&self) -> f64 {
        self.heading_offset_deg.abs()
    }
}

/// Same catalog entry at the same distance and offset
impl PartialEq for BuildingWithLocation {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.building, &other.building)
            && self.distance_km == other.distance_km
            && self.heading_offset_deg == other.heading_offset_deg
    }
}

impl fmt::Display for BuildingWithLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.3} km, {:+.1}°)",
            self.building.short_name(),
            self.distance_km,
            self.heading_offset_deg
        )
    }
}

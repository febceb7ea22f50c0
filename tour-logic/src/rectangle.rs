use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    error::TourError,
    location::{Location, normalize_degrees},
    prelude::*,
};

/// The location of a place as a rectangle with four [Location]s as the corners. The edges run
/// exactly north-south and east-west, so there are only two distinct latitudes and two distinct
/// longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[Location; 4]", into = "[Location; 4]")]
pub struct RectangularLocation {
    north_west: Location,
    north_east: Location,
    south_west: Location,
    south_east: Location,
}

fn by_longitude_then_latitude(lhs: &Location, rhs: &Location) -> Ordering {
    // Coordinates are finite by the time this runs, so partial_cmp always answers
    lhs.longitude
        .partial_cmp(&rhs.longitude)
        .unwrap_or(Ordering::Equal)
        .then(
            lhs.latitude
                .partial_cmp(&rhs.latitude)
                .unwrap_or(Ordering::Equal),
        )
}

fn count_distinct(mut values: [f64; 4]) -> usize {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mut distinct = values.to_vec();
    distinct.dedup();
    distinct.len()
}

impl RectangularLocation {
    /// Creates a [RectangularLocation] from four corners given in any order.
    pub fn new(a: Location, b: Location, c: Location, d: Location) -> Result<Self> {
        let mut corners = [a, b, c, d];

        if corners
            .iter()
            .any(|c| !c.latitude.is_finite() || !c.longitude.is_finite())
        {
            return Err(TourError::InvalidGeometry(
                "corners must have finite coordinates".to_string(),
            ));
        }

        let latitudes = count_distinct(corners.map(|c| c.latitude));
        if latitudes != 2 {
            return Err(TourError::InvalidGeometry(format!(
                "must have exactly two distinct latitudes, found {latitudes}"
            )));
        }

        let longitudes = count_distinct(corners.map(|c| c.longitude));
        if longitudes != 2 {
            return Err(TourError::InvalidGeometry(format!(
                "must have exactly two distinct longitudes, found {longitudes}"
            )));
        }

        corners.sort_by(by_longitude_then_latitude);
        let [south_west, north_west, south_east, north_east] = corners;

        // Two of each can still repeat a corner, every combination has to be present
        let is_rectangle = south_west.longitude == north_west.longitude
            && south_east.longitude == north_east.longitude
            && south_west.latitude == south_east.latitude
            && north_west.latitude == north_east.latitude;
        if !is_rectangle {
            return Err(TourError::InvalidGeometry(
                "corners must cover every latitude/longitude combination".to_string(),
            ));
        }

        Ok(Self {
            north_west,
            north_east,
            south_west,
            south_east,
        })
    }

    pub fn north_west(&self) -> Location {
        self.north_west
    }

    pub fn north_east(&self) -> Location {
        self.north_east
    }

    pub fn south_west(&self) -> Location {
        self.south_west
    }

    pub fn south_east(&self) -> Location {
        self.south_east
    }

    /// All four corners, clockwise from the north west
    pub fn corners(&self) -> [Location; 4] {
        [
            self.north_west,
            self.north_east,
            self.south_east,
            self.south_west,
        ]
    }

    pub fn north(&self) -> f64 {
        self.north_east.latitude
    }

    pub fn south(&self) -> f64 {
        self.south_west.latitude
    }

    pub fn east(&self) -> f64 {
        self.north_east.longitude
    }

    pub fn west(&self) -> f64 {
        self.south_west.longitude
    }

    /// Footprint size in square degrees, only meaningful for comparing footprints
    pub fn area_deg2(&self) -> f64 {
        (self.north() - self.south()) * (self.east() - self.west())
    }

    /// Returns the closest point of this rectangle to `location`: `location` itself when it is
    /// inside, otherwise a point on the perimeter.
    pub fn find_closest_point_within(&self, location: &Location) -> Location {
        let latitude = (self.south()..=self.north())
            .contains(&location.latitude)
            .then_some(location.latitude);
        let longitude = (self.west()..=self.east())
            .contains(&location.longitude)
            .then_some(location.longitude);

        if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
            return Location::new(latitude, longitude);
        }

        // Whatever axis is out of range has to come from a corner, pick the nearest one.
        self.corners()
            .into_iter()
            .map(|corner| {
                Location::new(
                    latitude.unwrap_or(corner.latitude),
                    longitude.unwrap_or(corner.longitude),
                )
            })
            .min_by(|a, b| a.distance_km(location).total_cmp(&b.distance_km(location)))
            .unwrap_or(*location)
    }

    /// Whether `location` is inside this rectangle, edges and corners included
    pub fn is_contained(&self, location: &Location) -> bool {
        (self.south()..=self.north()).contains(&location.latitude)
            && (self.west()..=self.east()).contains(&location.longitude)
    }

    /// Signed angle in degrees between `heading` and this rectangle as seen from `observer`.
    /// Negative is to the left and positive to the right. Returns exactly 0 when the rectangle
    /// spans the ray the observer is facing along.
    ///
    /// When two corners are equally far off the heading on opposite sides, the right-hand
    /// (positive) offset wins.
    pub fn compute_heading_offset(&self, observer: &Location, heading: f64) -> f64 {
        let offsets = self
            .corners()
            .map(|corner| normalize_degrees(observer.bearing_to(&corner) - heading));

        let min = offsets.iter().copied().fold(f64::INFINITY, f64::min);
        let max = offsets.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if min <= 0.0 && max >= 0.0 && max - min <= 180.0 {
            return 0.0;
        }

        offsets
            .into_iter()
            .reduce(|best, offset| match offset.abs().total_cmp(&best.abs()) {
                Ordering::Less => offset,
                Ordering::Equal if offset > best => offset,
                _ => best,
            })
            .unwrap_or(0.0)
    }
}

impl TryFrom<[Location; 4]> for RectangularLocation {
    type Error = TourError;

    fn try_from([a, b, c, d]: [Location; 4]) -> Result<Self> {
        Self::new(a, b, c, d)
    }
}

impl From<RectangularLocation> for [Location; 4] {
    fn from(value: RectangularLocation) -> Self {
        value.corners()
    }
}

//! Picking the building the user is inside, or the buildings to their left, front, and right.
//!
//! Everything here is a pure function of the catalog, one fix, and one heading, so it can be
//! exercised without any sensors.

use std::{cmp::Ordering, sync::Arc};

use log::debug;
use serde::Serialize;

use crate::{
    building::{Building, Buildings},
    building_with_location::BuildingWithLocation,
    location::Location,
    settings::TrackingSettings,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// The buildings around the user at one fix
pub struct Selection {
    pub left: Option<BuildingWithLocation>,
    pub front: Option<BuildingWithLocation>,
    pub right: Option<BuildingWithLocation>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.front.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Where the user is relative to the catalog at one fix
pub enum Resolution {
    Inside(Arc<Building>),
    Outside(Selection),
}

/// Finds the building containing `location`.
///
/// Footprints can overlap (a wing drawn inside its main building, for example). The smallest
/// footprint containing the user wins since it's the most specific, ties go to catalog order.
pub fn find_containing(buildings: &Buildings, location: &Location) -> Option<Arc<Building>> {
    buildings
        .iter()
        .filter(|b| b.location().is_contained(location))
        .min_by(|a, b| {
            a.location()
                .area_deg2()
                .total_cmp(&b.location().area_deg2())
        })
        .cloned()
}

fn by_offset_then_distance(a: &BuildingWithLocation, b: &BuildingWithLocation) -> Ordering {
    a.abs_offset()
        .total_cmp(&b.abs_offset())
        .then(a.distance_km().total_cmp(&b.distance_km()))
}

fn by_distance_then_offset(a: &BuildingWithLocation, b: &BuildingWithLocation) -> Ordering {
    a.distance_km()
        .total_cmp(&b.distance_km())
        .then(a.abs_offset().total_cmp(&b.abs_offset()))
}

/// Nearest of `candidates` whose offset passes `side`, `candidates` must already be sorted by
/// distance.
fn nearest_on_side(
    candidates: &[BuildingWithLocation],
    side: impl Fn(f64) -> bool,
) -> Option<BuildingWithLocation> {
    candidates
        .iter()
        .find(|c| side(c.heading_offset_deg()))
        .cloned()
}

/// Picks the buildings to the left, front, and right of a user standing at `location` facing
/// `heading`.
///
/// Only buildings in the forward hemisphere are considered. The front building is the one
/// closest to the heading within the cone of visual attention, and the sides prefer other
/// buildings in that cone before looking further out. A building whose offset exactly matches
/// the front building's is hidden behind it and never becomes a side.
pub fn select_nearby(
    buildings: &Buildings,
    location: &Location,
    heading: f64,
    settings: &TrackingSettings,
) -> Selection {
    let mut hemisphere = buildings
        .iter()
        .map(|b| BuildingWithLocation::new(b.clone(), location, heading))
        .filter(|b| b.abs_offset() <= settings.hemisphere_deg)
        .collect::<Vec<_>>();
    hemisphere.sort_by(by_offset_then_distance);

    let (in_cone, mut outside_cone): (Vec<_>, Vec<_>) = hemisphere
        .into_iter()
        .partition(|b| b.abs_offset() <= settings.half_cone());
    outside_cone.sort_by(by_distance_then_offset);

    debug!(
        "{} buildings in cone, {} outside cone",
        in_cone.len(),
        outside_cone.len()
    );

    let mut in_cone = in_cone.into_iter();

    let Some(front) = in_cone.next() else {
        return Selection {
            left: nearest_on_side(&outside_cone, |o| o < 0.0),
            front: None,
            right: nearest_on_side(&outside_cone, |o| o > 0.0),
        };
    };

    let front_offset = front.heading_offset_deg();
    let mut rest = in_cone.collect::<Vec<_>>();
    rest.sort_by(|a, b| {
        a.distance_km().total_cmp(&b.distance_km()).then(
            (a.heading_offset_deg() - front_offset)
                .abs()
                .total_cmp(&(b.heading_offset_deg() - front_offset).abs()),
        )
    });

    let left = nearest_on_side(&rest, |o| o < front_offset)
        .or_else(|| nearest_on_side(&outside_cone, |o| o < 0.0));
    let right = nearest_on_side(&rest, |o| o > front_offset)
        .or_else(|| nearest_on_side(&outside_cone, |o| o > 0.0));

    Selection {
        left,
        front: Some(front),
        right,
    }
}

/// Works out whether the user is inside a building, and if not what's around them.
pub fn resolve(
    buildings: &Buildings,
    location: &Location,
    heading: f64,
    settings: &TrackingSettings,
) -> Resolution {
    match find_containing(buildings, location) {
        Some(building) => Resolution::Inside(building),
        None => Resolution::Outside(select_nearby(buildings, location, heading, settings)),
    }
}

use std::{fmt, sync::Arc};

use serde::Serialize;

use crate::{
    building::Building, building_with_location::BuildingWithLocation,
    manager::BuildingLocationListener, selection::Selection,
};

/// A change the [crate::BuildingLocationManager] tells its listeners about
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Notification {
    /// The buildings to the left, front, or right changed
    NearbyBuildingsChange(Selection),
    /// The user walked into a building
    EnterBuilding(Arc<Building>),
    /// The user walked out of the building they were in
    ExitBuilding,
    /// Compass interference started (`true`) or stopped (`false`)
    CompassInterference(bool),
    /// The GPS fix was regained (`true`) or lost (`false`)
    HasLocationChange(bool),
}

impl Notification {
    /// Calls the matching callback on `listener`
    pub fn deliver(&self, listener: &dyn BuildingLocationListener) {
        match self {
            Self::NearbyBuildingsChange(selection) => listener.on_nearby_buildings_change(
                selection.left.as_ref(),
                selection.front.as_ref(),
                selection.right.as_ref(),
            ),
            Self::EnterBuilding(building) => listener.on_enter_building(building),
            Self::ExitBuilding => listener.on_exit_building(),
            Self::CompassInterference(has_interference) => {
                listener.on_compass_interference(*has_interference)
            }
            Self::HasLocationChange(has_location) => listener.on_has_location_change(*has_location),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn side(b: &Option<BuildingWithLocation>) -> String {
            b.as_ref()
                .map(|b| b.to_string())
                .unwrap_or_else(|| "-".to_string())
        }

        match self {
            Self::NearbyBuildingsChange(s) => write!(
                f,
                "Nearby: left {} | front {} | right {}",
                side(&s.left),
                side(&s.front),
                side(&s.right)
            ),
            Self::EnterBuilding(building) => write!(f, "Entered {}", building.name()),
            Self::ExitBuilding => write!(f, "Exited building"),
            Self::CompassInterference(true) => write!(f, "Compass interference detected"),
            Self::CompassInterference(false) => write!(f, "Compass interference cleared"),
            Self::HasLocationChange(true) => write!(f, "Location fix acquired"),
            Self::HasLocationChange(false) => write!(f, "Location fix lost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{RecordingListener, located, square};

    #[test]
    fn test_deliver_matches_callback() {
        let catalog = crate::Buildings::new(vec![square("Chapel", 0.01, 0.0)]);
        let recorder = RecordingListener::default();
        let notifications = vec![
            Notification::HasLocationChange(true),
            Notification::NearbyBuildingsChange(Selection {
                left: None,
                front: Some(located(&catalog, 0, 0.0)),
                right: None,
            }),
            Notification::EnterBuilding(catalog.all()[0].clone()),
            Notification::ExitBuilding,
            Notification::CompassInterference(true),
        ];

        for notification in notifications.iter() {
            notification.deliver(&recorder);
        }
        assert_eq!(recorder.take(), notifications);
    }

    #[test]
    fn test_display() {
        let catalog = crate::Buildings::new(vec![square("Chapel", 0.01, 0.0)]);
        let nearby = Notification::NearbyBuildingsChange(Selection {
            left: None,
            front: Some(located(&catalog, 0, 0.0)),
            right: None,
        });

        assert_eq!(
            nearby.to_string(),
            "Nearby: left - | front Chapel (1.084 km, +0.0°) | right -"
        );
        assert_eq!(
            Notification::EnterBuilding(catalog.all()[0].clone()).to_string(),
            "Entered Chapel"
        );
    }
}

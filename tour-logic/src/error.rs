use thiserror::Error;

/// Errors raised by the tour core. All of them are contract violations by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The corners given for a [crate::RectangularLocation] do not describe an axis-aligned
    /// rectangle
    #[error("Invalid rectangle geometry: {0}")]
    InvalidGeometry(String),

    /// [crate::BuildingLocationManager::get_building_inside] was called while outside
    #[error("Not currently inside a building")]
    NotInsideBuilding,
}

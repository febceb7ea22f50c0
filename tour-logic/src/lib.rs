mod building;
mod building_with_location;
mod error;
mod location;
mod manager;
mod notification;
mod rectangle;
mod selection;
mod settings;

pub use building::{Attraction, Building, Buildings, Photo};
pub use building_with_location::BuildingWithLocation;
pub use error::TourError;
pub use location::{
    EARTH_RADIUS_KM, Location, LocationComponent, OrientationEvent, OrientationListener,
    OrientationProvider, normalize_degrees,
};
pub use manager::{BuildingLocationListener, BuildingLocationManager};
pub use notification::Notification;
pub use rectangle::RectangularLocation;
pub use selection::{Resolution, Selection, find_containing, resolve, select_nearby};
pub use settings::{CONE_OF_VISUAL_ATTENTION, HEMISPHERE, TrackingSettings};

pub use prelude::Result;

pub mod prelude {
    pub use crate::error::TourError;
    use std::result::Result as StdResult;
    pub type Result<T = (), E = TourError> = StdResult<T, E>;
}

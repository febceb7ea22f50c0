use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::rectangle::RectangularLocation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A photo of a building or attraction, only the presentation layer knows how to draw it
pub struct Photo {
    /// Name of the image resource
    #[serde(rename = "drawableName", alias = "drawable")]
    pub drawable: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// An attraction or interesting place within a [Building]
pub struct Attraction {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A building on the tour
pub struct Building {
    name: String,
    #[serde(alias = "short_name")]
    short_name: String,
    #[serde(default)]
    description: Option<String>,
    location: RectangularLocation,
    #[serde(default)]
    photos: Vec<Photo>,
    #[serde(default)]
    attractions: Vec<Attraction>,
}

impl Building {
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        location: RectangularLocation,
    ) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            description: None,
            location,
            photos: Vec::new(),
            attractions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_photo(mut self, photo: Photo) -> Self {
        self.photos.push(photo);
        self
    }

    pub fn with_attraction(mut self, attraction: Attraction) -> Self {
        self.attractions.push(attraction);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name short enough for a card title
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The footprint of the building
    pub fn location(&self) -> &RectangularLocation {
        &self.location
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn attractions(&self) -> &[Attraction] {
        &self.attractions
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
/// The catalog of every building on the tour, in a fixed order. Buildings are shared so that
/// located snapshots can point back at the catalog entry.
pub struct Buildings {
    buildings: Vec<Arc<Building>>,
}

impl Buildings {
    pub fn new(buildings: Vec<Building>) -> Self {
        buildings.into_iter().collect()
    }

    pub fn all(&self) -> &[Arc<Building>] {
        &self.buildings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Building>> {
        self.buildings.iter()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

impl FromIterator<Building> for Buildings {
    fn from_iter<T: IntoIterator<Item = Building>>(iter: T) -> Self {
        Self {
            buildings: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

//! Located entities, and the park record the map displays.

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::coord::{validate_location, GeoError};


/// An entity with a stable identifier and a position.
///
/// The clustering functions only ever read these two properties, the
/// remainder of the implementing type is carried through untouched.
pub trait Located: Clone {
    /// Returns the identifier of the entity. Expected to be unique
    /// within a single clustering call.
    fn id(&self) -> &str;

    /// Returns the position of the entity, `x` being the longitude
    /// and `y` the latitude.
    fn location(&self) -> Point;
}

/// An outdoor calisthenics park or fitness station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Park {
    pub id: String,
    pub name: String,
    pub location: Point,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Park {
    /// Creates a park at the given latitude and longitude, in degrees.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Result<Self, GeoError> {
        Ok(Park {
            id: id.into(),
            name: name.into(),
            location: validate_location(lat, lng)?,
            description: None,
            equipment: vec![],
            rating: None,
            images: vec![],
        })
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn with_equipment<I, S>(self, equipment: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            equipment: equipment.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn with_rating(self, rating: f64) -> Self {
        Self {
            rating: Some(rating),
            ..self
        }
    }

    pub fn with_images<I, S>(self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lng(&self) -> f64 {
        self.location.x()
    }
}

impl Located for Park {
    fn id(&self) -> &str {
        &self.id
    }

    fn location(&self) -> Point {
        self.location
    }
}

impl From<Park> for Point {
    fn from(park: Park) -> Self {
        park.location
    }
}

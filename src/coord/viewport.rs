use geo::{coord, Intersects, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::coord::GeoError;

/// A rectangular region in degrees, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl Bounds {
    pub fn contains(&self, point: &Point) -> bool {
        Rect::from(*self).intersects(point)
    }
}

impl From<Bounds> for Rect {
    fn from(bounds: Bounds) -> Self {
        Rect::new(
            coord! { x: bounds.west, y: bounds.south },
            coord! { x: bounds.east, y: bounds.north },
        )
    }
}

/// The visible map region, given as a centre and the angular span shown
/// along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Viewport {
    /// Central Eindhoven, the region shown before the user moves the map.
    pub const EINDHOVEN: Viewport = Viewport {
        latitude: 51.4416,
        longitude: 5.4697,
        latitude_delta: 0.1,
        longitude_delta: 0.1,
    };

    pub fn new(
        latitude: f64,
        longitude: f64,
        latitude_delta: f64,
        longitude_delta: f64,
    ) -> Result<Self, GeoError> {
        let viewport = Viewport {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        };

        viewport.validate()?;
        Ok(viewport)
    }

    fn validate(&self) -> Result<(), GeoError> {
        crate::coord::validate_location(self.latitude, self.longitude)?;

        for (axis, delta) in [
            ("latitude", self.latitude_delta),
            ("longitude", self.longitude_delta),
        ] {
            if !(delta.is_finite() && delta > 0.0) {
                return Err(GeoError::InvalidViewport(format!(
                    "The {axis} span must be a positive number of degrees. Given: {delta}"
                )));
            }
        }

        Ok(())
    }

    /// The region covered, half a span either side of the centre.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            south: self.latitude - self.latitude_delta / 2.0,
            north: self.latitude + self.latitude_delta / 2.0,
            west: self.longitude - self.longitude_delta / 2.0,
            east: self.longitude + self.longitude_delta / 2.0,
        }
    }

    /// The zoom level implied by the latitude span: the number of times the
    /// full 360° must be halved to reach it, rounded to the nearest level.
    pub fn zoom_level(&self) -> Result<f64, GeoError> {
        self.validate()?;
        Ok((360.0 / self.latitude_delta).log2().round())
    }

    pub fn centre(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::EINDHOVEN
    }
}

//! Coordinate handling for located entities.
//!
//! Positions are carried as [`geo::Point`], with `x` holding the longitude
//! and `y` the latitude, both in degrees. Nothing here projects or measures
//! distance; points are only validated and compared against bounding boxes.

pub const MAX_LAT: f64 = 90.0;
pub const MAX_LNG: f64 = 180.0;

#[doc(hidden)]
pub mod error;
pub mod viewport;


#[doc(inline)]
pub use error::GeoError;
#[doc(inline)]
pub use viewport::{Bounds, Viewport};

use geo::Point;

/// Builds a [`Point`] from a latitude, longitude pair in degrees, rejecting
/// anything that is not a real position on the globe.
///
/// ```rust
/// use parkgrid::coord::validate_location;
///
/// let amsterdam = validate_location(52.3676, 4.9041).expect("valid location");
/// assert_eq!(amsterdam.x(), 4.9041);
/// assert!(validate_location(f64::NAN, 4.9041).is_err());
/// ```
pub fn validate_location(lat: f64, lng: f64) -> Result<Point, GeoError> {
    if !lat.is_finite() || !(-MAX_LAT..=MAX_LAT).contains(&lat) {
        return Err(GeoError::InvalidCoordinate(format!(
            "Latitude must be within -90 and 90. Given: {}",
            lat
        )));
    }

    if !lng.is_finite() || !(-MAX_LNG..=MAX_LNG).contains(&lng) {
        return Err(GeoError::InvalidCoordinate(format!(
            "Longitude must be within -180 and 180. Given: {}",
            lng
        )));
    }

    Ok(Point::new(lng, lat))
}

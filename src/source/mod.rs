//! Where parks come from.
//!
//! A [`ParkSource`] answers with the parks inside a bounding box. Fetching
//! over the network is left to the caller; the sources here work on data
//! already in memory.

use crate::coord::Bounds;
use crate::park::Park;

#[doc(hidden)]
pub mod error;
pub mod fixture;
pub mod overpass;


#[doc(inline)]
pub use error::SourceError;
#[doc(inline)]
pub use fixture::StaticSource;
#[doc(inline)]
pub use overpass::{OverpassQuery, OverpassSource};

pub trait ParkSource {
    /// Returns every known park within `bounds`.
    fn parks_within(&self, bounds: &Bounds) -> Result<Vec<Park>, SourceError>;
}

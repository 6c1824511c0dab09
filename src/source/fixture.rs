use log::debug;

use crate::coord::{Bounds, GeoError};
use crate::park::{Located, Park};
use crate::source::{ParkSource, SourceError};

/// A fixed, in-memory list of parks.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    parks: Vec<Park>,
}

impl StaticSource {
    pub fn new(parks: Vec<Park>) -> Self {
        StaticSource { parks }
    }

    /// The parks bundled with the app, used before any region is fetched.
    pub fn bundled() -> Result<Self, GeoError> {
        let parks = vec![
            Park::new("1", "Calisthenics Park Amsterdam", 52.3676, 4.9041)?
                .with_description("Modern calisthenics park with various equipment")
                .with_equipment(["Pull-up bars", "Parallel bars", "Monkey bars", "Rings"])
                .with_rating(4.5),
            Park::new("2", "Rotterdam Calisthenics", 51.9244, 4.4777)?
                .with_description("Outdoor fitness park in Rotterdam")
                .with_equipment(["Pull-up bars", "Dip bars", "Climbing frame"])
                .with_rating(4.2),
            Park::new("3", "Utrecht Calisthenics Spot", 52.0907, 5.1214)?
                .with_description("Popular calisthenics location in Utrecht")
                .with_equipment(["Pull-up bars", "Rings", "Monkey bars"])
                .with_rating(4.0),
        ];

        Ok(StaticSource::new(parks))
    }

    pub fn parks(&self) -> &[Park] {
        &self.parks
    }
}

impl ParkSource for StaticSource {
    fn parks_within(&self, bounds: &Bounds) -> Result<Vec<Park>, SourceError> {
        let parks: Vec<Park> = self
            .parks
            .iter()
            .filter(|park| bounds.contains(&park.location()))
            .cloned()
            .collect();

        debug!(
            "{} of {} static parks within {bounds:?}",
            parks.len(),
            self.parks.len()
        );
        Ok(parks)
    }
}

impl From<Vec<Park>> for StaticSource {
    fn from(parks: Vec<Park>) -> Self {
        StaticSource::new(parks)
    }
}

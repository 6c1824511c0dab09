//! Decoding of [Overpass API](https://wiki.openstreetmap.org/wiki/Overpass_API)
//! responses into parks.
//!
//! Only the query text and the JSON decoding live here. The request itself
//! is a single `POST` of [`OverpassQuery`] to [`OVERPASS_API`], made by
//! whoever owns the network.

use std::fmt::{Display, Formatter};

use log::{info, warn};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;

use crate::coord::Bounds;
use crate::park::{Located, Park};
use crate::source::{ParkSource, SourceError};

pub const OVERPASS_API: &str = "https://overpass-api.de/api/interpreter";

pub const DEFAULT_NAME: &str = "Calisthenics Park";
pub const DEFAULT_DESCRIPTION: &str = "Outdoor fitness equipment";

/// Tag filters selecting outdoor workout spots.
const FILTERS: [(&str, &str); 2] = [("leisure", "fitness_station"), ("sport", "calisthenics")];

/// The Overpass QL query for workout spots inside a bounding box, and
/// optionally inside a named municipality as well.
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassQuery {
    pub bounds: Bounds,
    pub area: Option<String>,
    pub timeout: u32,
}

impl OverpassQuery {
    pub fn new(bounds: Bounds) -> Self {
        OverpassQuery {
            bounds,
            area: None,
            timeout: 25,
        }
    }

    /// Also match spots inside the municipality (`admin_level=8`) named `area`.
    pub fn within_area(self, area: impl Into<String>) -> Self {
        Self {
            area: Some(area.into()),
            ..self
        }
    }
}

impl Display for OverpassQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Bounds {
            south,
            west,
            north,
            east,
        } = self.bounds;

        writeln!(f, "[out:json][timeout:{}];", self.timeout)?;
        if let Some(area) = &self.area {
            writeln!(f, "area[name=\"{area}\"][admin_level=\"8\"]->.area;")?;
        }

        writeln!(f, "(")?;
        if self.area.is_some() {
            for (key, value) in FILTERS {
                writeln!(f, "  node[\"{key}\"=\"{value}\"](area.area);")?;
            }
        }
        for (key, value) in FILTERS {
            writeln!(f, "  node[\"{key}\"=\"{value}\"]({south},{west},{north},{east});")?;
        }
        writeln!(f, ");")?;
        writeln!(f, "out body;")?;
        writeln!(f, ">;")?;
        write!(f, "out skel qt;")
    }
}

#[derive(Debug, Deserialize)]
struct Element {
    id: i64,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    tags: FxHashMap<String, String>,
}

impl Element {
    fn into_park(mut self) -> Option<Result<Park, SourceError>> {
        let (lat, lon) = (self.lat?, self.lon?);

        let name = self.tags.remove("name").unwrap_or(DEFAULT_NAME.to_string());
        let description = self
            .tags
            .remove("description")
            .unwrap_or(DEFAULT_DESCRIPTION.to_string());
        let equipment = self
            .tags
            .remove("equipment")
            .map(|list| {
                list.split(';')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Some(
            Park::new(self.id.to_string(), name, lat, lon)
                .map(|park| park.with_description(description).with_equipment(equipment))
                .map_err(SourceError::from),
        )
    }
}

/// Decodes an Overpass JSON response body into parks.
///
/// Elements without a position (skeleton ways and relations) are skipped,
/// as are elements whose position is invalid. A body without an `elements`
/// array holds no parks.
pub fn parse_response(body: &str) -> Result<Vec<Park>, SourceError> {
    let document: Value = serde_json::from_str(body)?;

    let Some(elements) = document.get("elements").and_then(Value::as_array) else {
        info!("Overpass response holds no elements");
        return Ok(vec![]);
    };

    let parks: Vec<Park> = elements
        .iter()
        .filter_map(|value| match Element::deserialize(value) {
            Ok(element) => element.into_park(),
            Err(err) => {
                warn!("Skipping undecodable element: {err}");
                None
            }
        })
        .filter_map(|park| match park {
            Ok(park) => Some(park),
            Err(err) => {
                warn!("Skipping element: {err}");
                None
            }
        })
        .collect();

    info!("Decoded {} of {} elements into parks", parks.len(), elements.len());
    Ok(parks)
}

/// Parks decoded from an already fetched Overpass response.
#[derive(Debug, Clone, Default)]
pub struct OverpassSource {
    parks: Vec<Park>,
}

impl OverpassSource {
    pub fn from_response(body: &str) -> Result<Self, SourceError> {
        Ok(OverpassSource {
            parks: parse_response(body)?,
        })
    }

    pub fn parks(&self) -> &[Park] {
        &self.parks
    }
}

impl ParkSource for OverpassSource {
    fn parks_within(&self, bounds: &Bounds) -> Result<Vec<Park>, SourceError> {
        Ok(self
            .parks
            .iter()
            .filter(|park| bounds.contains(&park.location()))
            .cloned()
            .collect())
    }
}

//! Tunables for the clustering pipeline.
//!
//! The defaults are the values the map has always shipped with; every one
//! of them can be overridden from the environment (or a `.env` file loaded
//! by the binary) using the `PARKGRID_` prefixed variables below.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};


/// Edge length, in degrees, of the first-level grid cells.
pub const DEFAULT_CELL_SIZE: f64 = 0.01;
/// Zoom levels strictly above this are shown unclustered.
pub const DEFAULT_ZOOM_THRESHOLD: f64 = 14.0;
/// Edge length, in degrees, of the first coarsening pass.
pub const DEFAULT_COARSEN_CELL_SIZE: f64 = 0.05;
/// Factor applied to the cell size after every coarsening pass.
pub const DEFAULT_GROWTH: f64 = 1.5;
/// Deepest coarsening pass that may still re-bucket; passes run for depths `0..=max_depth`.
pub const DEFAULT_MAX_DEPTH: usize = 10;
/// Cluster count the coarsener tries to get under.
pub const DEFAULT_MAX_CLUSTERS: usize = 10;

pub const ENV_CELL_SIZE: &str = "PARKGRID_CELL_SIZE";
pub const ENV_ZOOM_THRESHOLD: &str = "PARKGRID_ZOOM_THRESHOLD";
pub const ENV_COARSEN_CELL_SIZE: &str = "PARKGRID_COARSEN_CELL_SIZE";
pub const ENV_GROWTH: &str = "PARKGRID_GROWTH";
pub const ENV_MAX_DEPTH: &str = "PARKGRID_MAX_DEPTH";
pub const ENV_MAX_CLUSTERS: &str = "PARKGRID_MAX_CLUSTERS";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterOptions {
    pub cell_size: f64,
    pub zoom_threshold: f64,
    pub coarsen_cell_size: f64,
    pub growth: f64,
    pub max_depth: usize,
    pub max_clusters: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        ClusterOptions {
            cell_size: DEFAULT_CELL_SIZE,
            zoom_threshold: DEFAULT_ZOOM_THRESHOLD,
            coarsen_cell_size: DEFAULT_COARSEN_CELL_SIZE,
            growth: DEFAULT_GROWTH,
            max_depth: DEFAULT_MAX_DEPTH,
            max_clusters: DEFAULT_MAX_CLUSTERS,
        }
    }
}

impl ClusterOptions {
    pub fn new() -> Self {
        ClusterOptions::default()
    }

    /// Reads overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads overrides through `lookup`, falling back to the default for
    /// any variable that is missing or does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ClusterOptions::default();

        let positive = |value: f64| value.is_finite() && value > 0.0;

        ClusterOptions {
            cell_size: read(&lookup, ENV_CELL_SIZE, defaults.cell_size, positive),
            zoom_threshold: read(&lookup, ENV_ZOOM_THRESHOLD, defaults.zoom_threshold, |v: f64| {
                v.is_finite()
            }),
            coarsen_cell_size: read(
                &lookup,
                ENV_COARSEN_CELL_SIZE,
                defaults.coarsen_cell_size,
                positive,
            ),
            // A factor at or below one would never widen the grid.
            growth: read(&lookup, ENV_GROWTH, defaults.growth, |v: f64| {
                v.is_finite() && v > 1.0
            }),
            max_depth: read(&lookup, ENV_MAX_DEPTH, defaults.max_depth, |_: usize| true),
            max_clusters: read(&lookup, ENV_MAX_CLUSTERS, defaults.max_clusters, |v: usize| v > 0),
        }
    }

    pub fn cell_size(self, cell_size: f64) -> Self {
        Self { cell_size, ..self }
    }

    pub fn zoom_threshold(self, zoom_threshold: f64) -> Self {
        Self {
            zoom_threshold,
            ..self
        }
    }

    pub fn coarsen_cell_size(self, coarsen_cell_size: f64) -> Self {
        Self {
            coarsen_cell_size,
            ..self
        }
    }

    pub fn growth(self, growth: f64) -> Self {
        Self { growth, ..self }
    }

    pub fn max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn max_clusters(self, max_clusters: usize) -> Self {
        Self {
            max_clusters,
            ..self
        }
    }
}

fn read<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    accept: impl Fn(T) -> bool,
) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(value) if accept(value) => value,
        Ok(value) => {
            warn!("Ignoring {key}={value}, out of range. Using {default}.");
            default
        }
        Err(err) => {
            warn!("Ignoring {key}={raw:?}: {err}. Using {default}.");
            default
        }
    }
}

//! Grid clustering of located entities.
//!
//! Entities are snapped onto a square grid of fixed cell size, and every
//! occupied cell becomes a [`Cluster`]. When a map region holds too many
//! cells to draw, [`coarsen`] re-snaps the clusters onto progressively
//! wider grids until few enough remain.
//!
//! ```rust
//! use parkgrid::cluster::{cluster, coarsen};
//! use parkgrid::options::ClusterOptions;
//! use parkgrid::park::Park;
//!
//! let parks = vec![
//!     Park::new("1", "Amsterdam", 52.3676, 4.9041).unwrap(),
//!     Park::new("2", "Amsterdam Oost", 52.3677, 4.9042).unwrap(),
//!     Park::new("3", "Rotterdam", 51.9244, 4.4777).unwrap(),
//! ];
//!
//! let clusters = cluster(parks, 10.0);
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].len(), 2);
//!
//! let merged = coarsen(clusters, 1, &ClusterOptions::default());
//! assert_eq!(merged.iter().map(|c| c.len()).sum::<usize>(), 3);
//! ```

use std::fmt::{Display, Formatter};

use geo::Point;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

pub mod coarsen;
pub mod grid;
pub mod policy;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use coarsen::{coarsen, coarsen_at, coarsen_with_report, CoarsenReport};
#[doc(inline)]
pub use grid::{cluster, cluster_entities};
#[doc(inline)]
pub use policy::{Markers, ZoomPolicy};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The integer coordinates of a grid cell: the floored longitude and
/// latitude, each divided by the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i64,
    pub y: i64,
}

impl GridCell {
    pub fn new(x: i64, y: i64) -> Self {
        GridCell { x, y }
    }

    /// The cell containing `point` on a grid of `cell_size` degrees.
    #[inline]
    pub fn of(point: &Point, cell_size: f64) -> Self {
        GridCell {
            x: (point.x() / cell_size).floor() as i64,
            y: (point.y() / cell_size).floor() as i64,
        }
    }
}

impl Display for GridCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// Identifies a cluster. Grid clusters are named by their cell, while
/// clusters built around a single entity carry that entity's identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterId {
    Cell(GridCell),
    Entity(String),
}

impl Display for ClusterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterId::Cell(cell) => write!(f, "{cell}"),
            ClusterId::Entity(id) => write!(f, "{id}"),
        }
    }
}

/// A group of entities drawn as one marker.
///
/// The marker position is the position of the first entity (or first
/// merged cluster) placed into it, and is never recomputed as members are
/// added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster<T> {
    id: ClusterId,
    location: Point,
    members: Vec<T>,
}

impl<T> Cluster<T> {
    pub(crate) fn new(id: ClusterId, location: Point) -> Self {
        Cluster {
            id,
            location,
            members: vec![],
        }
    }

    pub(crate) fn singleton(id: ClusterId, location: Point, member: T) -> Self {
        Cluster {
            id,
            location,
            members: vec![member],
        }
    }

    pub fn id(&self) -> &ClusterId {
        &self.id
    }

    pub fn location(&self) -> Point {
        self.location
    }

    /// Members, in the order they were placed into the cluster.
    pub fn members(&self) -> &[T] {
        &self.members
    }

    pub fn into_members(self) -> Vec<T> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<T> From<Cluster<T>> for Point {
    fn from(val: Cluster<T>) -> Self {
        val.location
    }
}

/// Snaps each source onto the grid by its position, merging the members of
/// every source that shares a cell. The first source seen in a cell fixes
/// the cluster position, and clusters come out in the order their cells
/// were first seen.
pub(crate) fn bucket<T, M>(
    sources: impl IntoIterator<Item = (Point, M)>,
    cell_size: f64,
) -> Vec<Cluster<T>>
where
    M: IntoIterator<Item = T>,
{
    let mut cells: FxIndexMap<GridCell, Cluster<T>> = FxIndexMap::default();

    for (location, members) in sources {
        let cell = GridCell::of(&location, cell_size);
        cells
            .entry(cell)
            .or_insert_with(|| Cluster::new(ClusterId::Cell(cell), location))
            .members
            .extend(members);
    }

    cells.into_values().collect()
}

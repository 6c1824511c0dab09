#![doc = include_str!("../README.md")]

pub mod cluster;
pub mod coord;
pub mod options;
pub mod park;
pub mod source;
pub mod util;

#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use cluster::{cluster, coarsen, Cluster, ClusterId, GridCell, Markers, ZoomPolicy};
#[doc(inline)]
pub use coord::{Bounds, GeoError, Viewport};
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use options::ClusterOptions;
#[doc(inline)]
pub use park::{Located, Park};
#[doc(inline)]
pub use source::{ParkSource, SourceError};

use log::info;
use serde::Serialize;

use crate::cluster::{cluster_entities, coarsen, Cluster};
use crate::options::ClusterOptions;
use crate::park::Located;

/// What the map should draw for a set of entities.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "markers", rename_all = "snake_case")]
pub enum Markers<T> {
    /// Zoomed in far enough to draw every entity with its own marker.
    Individual(Vec<T>),
    /// A lone entity, drawn as a plain marker instead of a cluster of one.
    Single(T),
    /// Numbered cluster markers.
    Clusters(Vec<Cluster<T>>),
}

impl<T> Markers<T> {
    /// Number of markers to draw.
    pub fn len(&self) -> usize {
        match self {
            Markers::Individual(entities) => entities.len(),
            Markers::Single(_) => 1,
            Markers::Clusters(clusters) => clusters.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decides, from the zoom level, how entities are grouped for display.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomPolicy {
    pub options: ClusterOptions,
}

impl ZoomPolicy {
    pub fn new(options: ClusterOptions) -> Self {
        ZoomPolicy { options }
    }

    /// Whether `zoom` is close enough to show entities unclustered.
    pub fn is_unclustered(&self, zoom: f64) -> bool {
        zoom > self.options.zoom_threshold
    }

    /// Grid-clusters `entities`, then coarsens the result when clustering
    /// is in effect and more than `max_clusters` clusters were produced.
    pub fn apply<T: Located>(
        &self,
        entities: impl IntoIterator<Item = T>,
        zoom: f64,
    ) -> Vec<Cluster<T>> {
        let clusters = cluster_entities(entities, zoom, &self.options);

        if self.is_unclustered(zoom) || clusters.len() <= self.options.max_clusters {
            return clusters;
        }

        let before = clusters.len();
        let clusters = coarsen(clusters, self.options.max_clusters, &self.options);

        info!("Coarsened {before} clusters into {}", clusters.len());
        clusters
    }

    /// Clusters `entities` and picks the markers to draw for them.
    pub fn markers<T: Located>(&self, entities: Vec<T>, zoom: f64) -> Markers<T> {
        if self.is_unclustered(zoom) {
            return Markers::Individual(entities);
        }

        let mut clusters = self.apply(entities, zoom);

        if clusters.len() == 1 && clusters[0].len() == 1 {
            if let Some(entity) = clusters.pop().and_then(|c| c.into_members().pop()) {
                return Markers::Single(entity);
            }
        }

        Markers::Clusters(clusters)
    }
}

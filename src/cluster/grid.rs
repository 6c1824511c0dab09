use std::iter;

use log::debug;

use crate::cluster::{bucket, Cluster, ClusterId};
use crate::options::ClusterOptions;
use crate::park::Located;

/// Clusters `entities` for display at `zoom`, using the default options.
///
/// See [`cluster_entities`].
pub fn cluster<T: Located>(entities: impl IntoIterator<Item = T>, zoom: f64) -> Vec<Cluster<T>> {
    cluster_entities(entities, zoom, &ClusterOptions::default())
}

/// Groups `entities` into first-level clusters.
///
/// Above the zoom threshold every entity is returned as its own cluster,
/// named after the entity. Otherwise entities are bucketed on a grid of
/// `options.cell_size` degrees, in input order.
pub fn cluster_entities<T: Located>(
    entities: impl IntoIterator<Item = T>,
    zoom: f64,
    options: &ClusterOptions,
) -> Vec<Cluster<T>> {
    if zoom > options.zoom_threshold {
        let clusters: Vec<Cluster<T>> = entities
            .into_iter()
            .map(|entity| {
                let id = ClusterId::Entity(entity.id().to_string());
                let location = entity.location();
                Cluster::singleton(id, location, entity)
            })
            .collect();

        debug!(
            "Zoom {zoom} above {}, {} entities left unclustered",
            options.zoom_threshold,
            clusters.len()
        );
        return clusters;
    }

    let clusters = bucket(
        entities
            .into_iter()
            .map(|entity| (entity.location(), iter::once(entity))),
        options.cell_size,
    );

    debug!(
        "Bucketed into {} clusters at cell size {}",
        clusters.len(),
        options.cell_size
    );
    clusters
}

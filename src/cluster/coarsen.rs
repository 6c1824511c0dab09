use log::debug;

use crate::cluster::{bucket, Cluster};
use crate::options::ClusterOptions;

/// Describes how much work a coarsening run performed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoarsenReport {
    /// Number of re-bucketing passes applied.
    pub passes: usize,
    /// The cell size the next pass would have used.
    pub cell_size: f64,
}

/// Merges `clusters` onto wider grids until at most `max_clusters` remain,
/// starting from `options.coarsen_cell_size`.
pub fn coarsen<T>(
    clusters: Vec<Cluster<T>>,
    max_clusters: usize,
    options: &ClusterOptions,
) -> Vec<Cluster<T>> {
    coarsen_at(clusters, max_clusters, 0, options.coarsen_cell_size, options)
}

/// As [`coarsen`], resuming from the given `depth` and `cell_size`.
///
/// Clusters are returned as given once there are at most `max_clusters`,
/// or once `depth` exceeds `options.max_depth`. Otherwise each cluster is
/// re-snapped by its position onto a grid of `cell_size` degrees, and the
/// process repeats one level deeper with the cell size grown by
/// `options.growth`. A pass never increases the cluster count, though it
/// need not reach `max_clusters` before the depth limit stops it.
pub fn coarsen_at<T>(
    clusters: Vec<Cluster<T>>,
    max_clusters: usize,
    depth: usize,
    cell_size: f64,
    options: &ClusterOptions,
) -> Vec<Cluster<T>> {
    coarsen_from(clusters, max_clusters, depth, cell_size, options).0
}

/// As [`coarsen`], also reporting the passes performed.
pub fn coarsen_with_report<T>(
    clusters: Vec<Cluster<T>>,
    max_clusters: usize,
    options: &ClusterOptions,
) -> (Vec<Cluster<T>>, CoarsenReport) {
    coarsen_from(clusters, max_clusters, 0, options.coarsen_cell_size, options)
}

fn coarsen_from<T>(
    mut clusters: Vec<Cluster<T>>,
    max_clusters: usize,
    mut depth: usize,
    mut cell_size: f64,
    options: &ClusterOptions,
) -> (Vec<Cluster<T>>, CoarsenReport) {
    let mut passes = 0;

    while clusters.len() > max_clusters && depth <= options.max_depth {
        let before = clusters.len();
        clusters = bucket(
            clusters
                .into_iter()
                .map(|cluster| (cluster.location, cluster.members)),
            cell_size,
        );

        debug!(
            "Coarsening pass {depth}: {before} -> {} clusters at cell size {cell_size}",
            clusters.len()
        );

        passes += 1;
        depth += 1;
        cell_size *= options.growth;
    }

    (clusters, CoarsenReport { passes, cell_size })
}

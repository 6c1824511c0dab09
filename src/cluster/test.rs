use approx::assert_relative_eq;
use geo::Point;
use itertools::Itertools;

use crate::cluster::*;
use crate::options::ClusterOptions;
use crate::park::{Located, Park};

fn park(id: &str, lat: f64, lng: f64) -> Park {
    Park::new(id, format!("Park {id}"), lat, lng).expect("test parks must be valid")
}

/// Deterministic spread of parks around the Netherlands.
fn scattered(count: usize) -> Vec<Park> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 10_000) as f64 / 10_000.0
    };

    (0..count)
        .map(|i| park(&i.to_string(), 50.8 + next() * 2.5, 3.4 + next() * 3.6))
        .collect()
}

/// Fifteen parks along a line, 0.011 degrees apart, each in its own cell.
fn fifteen_in_a_row() -> Vec<Park> {
    (0..15)
        .map(|i| park(&format!("row-{i}"), 51.4405, 5.4005 + i as f64 * 0.011))
        .collect()
}

fn member_ids<T: Located>(clusters: &[Cluster<T>]) -> Vec<String> {
    clusters
        .iter()
        .flat_map(|cluster| cluster.members().iter().map(|m| m.id().to_string()))
        .collect()
}

fn sorted_ids(parks: &[Park]) -> Vec<String> {
    parks.iter().map(|p| p.id.clone()).sorted().collect()
}

#[test]
fn nearby_parks_share_a_cell() {
    let parks = vec![park("a", 52.3676, 4.9041), park("b", 52.3677, 4.9042)];
    let clusters = cluster(parks, 10.0);

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].len(), 2);
    assert_eq!(clusters[0].id(), &ClusterId::Cell(GridCell::new(490, 5236)));
    assert_eq!(clusters[0].id().to_string(), "490:5236");
}

#[test]
fn distant_parks_stay_apart() {
    let parks = vec![park("ams", 52.37, 4.90), park("rtm", 51.92, 4.48)];
    let clusters = cluster(parks, 10.0);

    assert_eq!(clusters.len(), 2);
    assert!(clusters.iter().all(|c| c.len() == 1));
    assert_eq!(clusters[0].members()[0].id, "ams");
    assert_eq!(clusters[1].members()[0].id, "rtm");
}

#[test]
fn single_park_follows_zoom_branch() {
    let clustered = cluster(vec![park("solo", 51.4416, 5.4697)], 10.0);
    assert_eq!(clustered.len(), 1);
    assert_eq!(clustered[0].id(), &ClusterId::Cell(GridCell::of(&Point::new(5.4697, 51.4416), 0.01)));

    let unclustered = cluster(vec![park("solo", 51.4416, 5.4697)], 15.0);
    assert_eq!(unclustered.len(), 1);
    assert_eq!(unclustered[0].id(), &ClusterId::Entity("solo".to_string()));
    assert_eq!(unclustered[0].location(), Point::new(5.4697, 51.4416));
}

#[test]
fn empty_input_gives_no_clusters() {
    assert!(cluster(Vec::<Park>::new(), 10.0).is_empty());
    assert!(cluster(Vec::<Park>::new(), 18.0).is_empty());
    assert!(coarsen(Vec::<Cluster<Park>>::new(), 10, &ClusterOptions::default()).is_empty());
}

#[test]
fn high_zoom_is_one_cluster_per_park() {
    let parks = scattered(40);
    let clusters = cluster(parks.clone(), 14.5);

    assert_eq!(clusters.len(), parks.len());
    for (cluster, park) in clusters.iter().zip(&parks) {
        assert_eq!(cluster.id(), &ClusterId::Entity(park.id.clone()));
        assert_eq!(cluster.location(), park.location);
        assert_eq!(cluster.members(), std::slice::from_ref(park));
    }
}

#[test]
fn threshold_zoom_still_clusters() {
    let parks = vec![park("a", 52.3676, 4.9041), park("b", 52.3677, 4.9042)];
    assert_eq!(cluster(parks, 14.0).len(), 1);
}

#[test]
fn grid_clusters_partition_input() {
    let parks = scattered(500);
    let clusters = cluster(parks.clone(), 12.0);

    let ids: Vec<String> = member_ids(&clusters).into_iter().sorted().collect();
    assert_eq!(ids, sorted_ids(&parks));
    assert!(clusters.iter().all(|c| !c.is_empty()));
}

#[test]
fn grid_clusters_keep_input_order() {
    let parks = vec![
        park("first", 52.3676, 4.9041),
        park("other", 51.92, 4.48),
        park("second", 52.3679, 4.9045),
    ];
    let clusters = cluster(parks, 10.0);

    assert_eq!(clusters.len(), 2);
    let ids = clusters[0].members().iter().map(|p| p.id.as_str()).collect_vec();
    assert_eq!(ids, ["first", "second"]);
    // Position stays with the first park in the cell
    assert_eq!(clusters[0].location(), Point::new(4.9041, 52.3676));
}

#[test]
fn clustering_is_deterministic() {
    let parks = scattered(300);

    let first = cluster(parks.clone(), 11.0);
    let second = cluster(parks, 11.0);

    assert_eq!(first, second);
}

#[test]
fn negative_cells_are_distinct() {
    let parks = vec![park("sw", -0.015, -0.005), park("se", -0.015, 0.015)];
    let clusters = cluster(parks, 10.0);

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].id(), &ClusterId::Cell(GridCell::new(-1, -2)));
    assert_eq!(clusters[1].id(), &ClusterId::Cell(GridCell::new(1, -2)));
    assert_ne!(clusters[0].id().to_string(), clusters[1].id().to_string());
}

#[test_log::test]
fn coarsen_reduces_fifteen_to_ten() {
    let clusters = cluster(fifteen_in_a_row(), 12.0);
    assert_eq!(clusters.len(), 15);

    let (coarse, report) = coarsen_with_report(clusters, 10, &ClusterOptions::default());

    assert!(coarse.len() <= 10);
    assert_eq!(coarse.iter().map(Cluster::len).sum::<usize>(), 15);
    assert_eq!(report.passes, 1);
    assert_eq!(coarse.iter().map(Cluster::len).collect_vec(), [5, 5, 4, 1]);
}

#[test]
fn coarsen_keeps_first_representative() {
    let clusters = cluster(fifteen_in_a_row(), 12.0);
    let firsts = clusters.iter().map(Cluster::location).collect_vec();

    let coarse = coarsen(clusters, 10, &ClusterOptions::default());

    assert_eq!(coarse[0].location(), firsts[0]);
    assert_eq!(coarse[0].members()[0].id, "row-0");
    // Every coarse position was the position of some first-level cluster
    assert!(coarse.iter().all(|c| firsts.contains(&c.location())));
    assert!(coarse
        .iter()
        .all(|c| c.id() == &ClusterId::Cell(GridCell::of(&c.location(), 0.05))));
}

#[test]
fn coarsen_partitions_members() {
    let parks = scattered(500);
    let clusters = cluster(parks.clone(), 12.0);
    let coarse = coarsen(clusters, 10, &ClusterOptions::default());

    let ids: Vec<String> = member_ids(&coarse).into_iter().sorted().collect();
    assert_eq!(ids, sorted_ids(&parks));
}

#[test]
fn coarsen_never_grows_per_pass() {
    let options = ClusterOptions::default().max_depth(0);
    let mut clusters = cluster(scattered(400), 12.0);
    let mut cell_size = options.coarsen_cell_size;

    for depth in 0..12 {
        let before = clusters.len();
        clusters = coarsen_at(clusters, 1, 0, cell_size, &options);
        assert!(clusters.len() <= before, "pass {depth} grew {before} -> {}", clusters.len());
        cell_size *= options.growth;
    }
}

#[test]
fn coarsen_leaves_small_sets_untouched() {
    let clusters = cluster(scattered(5), 12.0);
    let (same, report) = coarsen_with_report(clusters.clone(), 10, &ClusterOptions::default());

    assert_eq!(same, clusters);
    assert_eq!(report.passes, 0);
    assert_relative_eq!(report.cell_size, 0.05);
}

#[test]
fn coarsen_stops_past_depth_limit() {
    let clusters = cluster(fifteen_in_a_row(), 12.0);
    let resumed = coarsen_at(clusters.clone(), 10, 11, 0.05, &ClusterOptions::default());

    assert_eq!(resumed, clusters);
}

#[test]
fn coarsen_terminates_within_eleven_passes() {
    // Spread far wider than any grid the coarsener will reach
    let parks = (0..16)
        .map(|i| park(&i.to_string(), -80.0 + i as f64 * 10.0, -170.0 + i as f64 * 23.0))
        .collect_vec();
    let clusters = cluster(parks, 4.0);

    let (coarse, report) = coarsen_with_report(clusters, 1, &ClusterOptions::default());

    assert_eq!(report.passes, 11);
    assert_eq!(coarse.len(), 16);
    assert_relative_eq!(report.cell_size, 0.05 * 1.5f64.powi(11), max_relative = 1e-12);
}

#[test]
fn policy_coarsens_only_when_crowded() {
    let policy = ZoomPolicy::default();

    let crowded = policy.apply(fifteen_in_a_row(), 12.0);
    assert_eq!(crowded.len(), 4);

    let ten = fifteen_in_a_row().into_iter().take(10).collect_vec();
    assert_eq!(policy.apply(ten, 12.0).len(), 10);

    let unclustered = policy.apply(fifteen_in_a_row(), 15.0);
    assert_eq!(unclustered.len(), 15);
}

#[test]
fn policy_picks_markers() {
    let policy = ZoomPolicy::default();

    match policy.markers(fifteen_in_a_row(), 16.0) {
        Markers::Individual(parks) => assert_eq!(parks.len(), 15),
        other => panic!("Expected individual markers, got {other:?}"),
    }

    match policy.markers(vec![park("solo", 51.44, 5.47)], 12.0) {
        Markers::Single(park) => assert_eq!(park.id, "solo"),
        other => panic!("Expected a single marker, got {other:?}"),
    }

    let pair = vec![park("a", 52.3676, 4.9041), park("b", 52.3677, 4.9042)];
    match policy.markers(pair, 12.0) {
        Markers::Clusters(clusters) => {
            assert_eq!(clusters.len(), 1);
            assert_eq!(clusters[0].len(), 2);
        }
        other => panic!("Expected cluster markers, got {other:?}"),
    }

    let nothing = policy.markers(Vec::<Park>::new(), 12.0);
    assert!(nothing.is_empty());
}

#[test]
fn cluster_ids_serialise_by_kind() {
    let cell = serde_json::to_value(ClusterId::Cell(GridCell::new(-1, 2))).expect("serialise");
    assert_eq!(cell, serde_json::json!({ "cell": { "x": -1, "y": 2 } }));

    let entity = serde_json::to_value(ClusterId::Entity("42".into())).expect("serialise");
    assert_eq!(entity, serde_json::json!({ "entity": "42" }));
}

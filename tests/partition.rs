use mapsplit::{
    aabbs_from_coords, build_conflict_graph, build_conflict_graph_with, partition_aabbs, Aabb,
    Broadphase, ConflictGraph, GraphError,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A scene of `count` random boxes crowded into a small volume.
fn random_scene(seed: u64, count: usize) -> Vec<Aabb> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| {
        let x = rng.random_range(0.0..40.0);
        let y = rng.random_range(0.0..40.0);
        let z = rng.random_range(0.0..8.0);
        let (w, d, h) = (rng.random_range(1.0..9.0), rng.random_range(1.0..9.0), rng.random_range(0.5..3.0));
        Aabb::new(x, y, z, x + w, y + d, z + h)
    }).collect()
}

#[test]
fn three_disjoint_boxes_share_one_group() {
    let aabbs = aabbs_from_coords(&[
        [0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        [5.0, 5.0, 5.0, 6.0, 6.0, 6.0],
        [10.0, 10.0, 10.0, 11.0, 11.0, 11.0],
    ]);
    let mut graph = build_conflict_graph(&aabbs);
    assert_eq!(graph.edge_count(), 0);

    graph.color_dsatur();
    assert!(graph.vertices().all(|v| v.color() == Some(0)));
    assert_eq!(graph.color_sets().unwrap(), vec![vec![0, 1, 2]]);
}

#[test]
fn mutually_overlapping_triangle_splits_into_singletons() {
    let aabbs = aabbs_from_coords(&[
        [0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
        [0.5, 0.5, 0.5, 1.5, 1.5, 1.5],
        [0.25, 0.0, 0.75, 1.25, 1.0, 1.75],
    ]);
    let graph = build_conflict_graph(&aabbs);
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 3);

    assert_eq!(partition_aabbs(&aabbs, Broadphase::Naive).unwrap(), vec![vec![0], vec![1], vec![2]]);
}

#[test]
fn petersen_graph_is_three_colorable() {
    let mut graph = ConflictGraph::new();
    for i in 0..10 { graph.add_node(i); }
    for (a, b) in [
        (0, 1), (1, 2), (2, 3), (3, 4), (4, 0),
        (0, 5), (1, 6), (2, 7), (3, 8), (4, 9),
        (5, 7), (7, 9), (9, 6), (6, 8), (8, 5),
    ] {
        graph.add_edge(a, b).unwrap();
    }
    assert_eq!(graph.edge_count(), 15);
    assert_eq!(graph.degree(0).unwrap(), 3);

    graph.color_dsatur();
    assert!(graph.is_properly_colored());
    assert_eq!(graph.color_sets().unwrap(), vec![vec![0, 2, 6], vec![1, 3, 5, 9], vec![4, 7, 8]]);
}

#[test]
fn no_boxes_means_no_groups() {
    assert!(partition_aabbs(&[], Broadphase::Naive).unwrap().is_empty());
}

#[test]
fn extraction_before_coloring_fails() {
    let graph = build_conflict_graph(&random_scene(1, 5));
    assert_eq!(graph.color_sets(), Err(GraphError::Uncolored(0)));
}

#[test]
fn random_scenes_partition_into_conflict_free_groups() {
    for seed in 0..8 {
        let aabbs = random_scene(seed, 150);
        let mut graph = build_conflict_graph(&aabbs);

        // Adjacency is symmetric and irreflexive.
        for v in graph.vertices() {
            assert!(!v.is_neighbor(v.index()));
            for n in v.neighbors() {
                assert!(graph.is_edge(n, v.index()).unwrap());
            }
        }

        graph.color_dsatur();
        let first = graph.vertices().map(|v| v.color()).collect::<Vec<_>>();
        graph.color_dsatur();
        assert_eq!(graph.vertices().map(|v| v.color()).collect::<Vec<_>>(), first, "seed {seed}");

        let groups = graph.color_sets().unwrap();

        // Every index appears exactly once.
        let mut all = groups.concat();
        all.sort_unstable();
        assert_eq!(all, (0..aabbs.len()).collect::<Vec<_>>());

        // No two boxes in a group intersect.
        for group in &groups {
            assert!(!group.is_empty());
            for (k, &a) in group.iter().enumerate() {
                for &b in &group[..k] {
                    assert!(!aabbs[a].intersects(&aabbs[b]), "seed {seed}: {a} and {b} overlap");
                }
            }
        }

        for broadphase in [Broadphase::Parallel, Broadphase::RTree] {
            assert_eq!(partition_aabbs(&aabbs, broadphase).unwrap(), groups, "seed {seed} {broadphase:?}");
        }
    }
}

#[test]
fn broadphase_choice_does_not_change_the_graph() {
    let aabbs = random_scene(99, 300);
    let degrees = |g: &ConflictGraph| g.vertices().map(|v| v.degree()).collect::<Vec<_>>();
    let naive = build_conflict_graph_with(&aabbs, Broadphase::Naive);
    for broadphase in [Broadphase::Parallel, Broadphase::RTree] {
        let other = build_conflict_graph_with(&aabbs, broadphase);
        assert_eq!(degrees(&other), degrees(&naive));
        assert_eq!(other.edge_count(), naive.edge_count());
    }
}

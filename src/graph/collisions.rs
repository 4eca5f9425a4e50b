use rayon::prelude::*;
use rstar::RTree;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    geom::{envelope_of, Aabb, BoundingBox},
    graph::ConflictGraph,
};

/// Strategy for finding the overlapping pairs. Every strategy yields the same edge set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Broadphase {
    /// Test every pair on the calling thread.
    #[default]
    Naive,
    /// Test every pair, spreading rows across the rayon pool.
    Parallel,
    /// Query an R-tree of the boxes for candidates.
    RTree,
}

/// Build the conflict graph of `aabbs`: vertex `i` is `aabbs[i]`, and an edge
/// joins every pair of intersecting boxes.
pub fn build_conflict_graph(aabbs: &[Aabb]) -> ConflictGraph {
    build_conflict_graph_with(aabbs, Broadphase::Naive)
}

/// Build the conflict graph of `aabbs` using the given broadphase.
pub fn build_conflict_graph_with(aabbs: &[Aabb], broadphase: Broadphase) -> ConflictGraph {
    let pairs = match broadphase {
        Broadphase::Naive => naive_pairs(aabbs),
        Broadphase::Parallel => parallel_pairs(aabbs),
        Broadphase::RTree => rtree_pairs(aabbs),
    };

    // Vertices 0..n sit at storage positions 0..n, so indices double as slots.
    let mut graph = ConflictGraph::with_nodes(aabbs.len());
    for &(i, j) in &pairs { graph.link(i, j) }

    debug!(?broadphase, vertices = graph.len(), edges = graph.edge_count(), "built conflict graph");
    graph
}

/// Intersecting pairs `(i, j)` with `j < i`, row by row.
fn naive_pairs(aabbs: &[Aabb]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in aabbs.iter().enumerate() {
        for (j, b) in aabbs[..i].iter().enumerate() {
            if a.intersects(b) { pairs.push((i, j)) }
        }
    }
    pairs
}

fn parallel_pairs(aabbs: &[Aabb]) -> Vec<(usize, usize)> {
    (0..aabbs.len()).into_par_iter()
        .flat_map_iter(|i| {
            aabbs[..i].iter().enumerate()
                .filter(move |(_, b)| aabbs[i].intersects(b))
                .map(move |(j, _)| (i, j))
        })
        .collect()
}

/// Well-formed boxes (finite, min <= max) go through the R-tree; anything
/// else is tested exhaustively so the edge set matches `naive_pairs`.
fn rtree_pairs(aabbs: &[Aabb]) -> Vec<(usize, usize)> {
    let indexable = |a: &Aabb| {
        (0..3).all(|axis| a.min()[axis].is_finite() && a.max()[axis].is_finite() && a.min()[axis] <= a.max()[axis])
    };

    let (tree_items, irregular): (Vec<_>, Vec<_>) = aabbs.iter().enumerate()
        .map(|(i, a)| BoundingBox::new(i, *a))
        .partition(|b| indexable(b.aabb()));
    let irregular = irregular.iter().map(BoundingBox::idx).collect::<Vec<_>>();
    let tree = RTree::bulk_load(tree_items);

    let mut pairs = Vec::new();
    for (i, a) in aabbs.iter().enumerate() {
        if indexable(a) {
            pairs.extend(tree.locate_in_envelope_intersecting(&envelope_of(a))
                .filter(|b| b.idx() < i && a.intersects(b.aabb()))
                .map(|b| (i, b.idx())));
            pairs.extend(irregular.iter()
                .filter(|&&j| j < i && a.intersects(&aabbs[j]))
                .map(|&j| (i, j)));
        } else {
            pairs.extend(aabbs[..i].iter().enumerate()
                .filter(|(_, b)| a.intersects(b))
                .map(|(j, _)| (i, j)));
        }
    }
    pairs.sort_unstable();
    pairs
}

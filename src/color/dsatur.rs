use std::{cmp::Reverse, collections::BTreeSet};

use ahash::AHashSet;
use tracing::debug;

use crate::graph::ConflictGraph;

/// Selection key: highest saturation, then highest degree, then earliest storage position.
type Key = (Reverse<usize>, Reverse<usize>, usize);

impl ConflictGraph {
    /// Clear all colors, then color every vertex with the DSATUR heuristic.
    ///
    /// Each round picks the uncolored vertex with the most distinct colors among
    /// its neighbors, breaking ties by degree and then by storage order, and gives
    /// it the smallest color none of its neighbors use. The result is a proper
    /// coloring, deterministic for a fixed graph and storage order.
    pub fn color_dsatur(&mut self) {
        self.clear_colors();

        let n = self.vertices.len();
        let adjacency = self.vertices.iter()
            .map(|v| v.neighbors().map(|u| self.slot_of_neighbor(u)).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        // seen[s] holds the distinct colors of the colored neighbors of slot s.
        let mut seen = vec![AHashSet::<usize>::new(); n];
        let key = |s: usize, seen: &[AHashSet<usize>]| -> Key {
            (Reverse(seen[s].len()), Reverse(adjacency[s].len()), s)
        };
        let mut queue = (0..n).map(|s| key(s, &seen)).collect::<BTreeSet<Key>>();

        while let Some((_, _, slot)) = queue.pop_first() {
            let color = smallest_unused(&seen[slot]);
            self.vertices[slot].color = Some(color);

            for &u in &adjacency[slot] {
                if self.vertices[u].color.is_some() || seen[u].contains(&color) { continue }
                queue.remove(&key(u, &seen));
                seen[u].insert(color);
                queue.insert(key(u, &seen));
            }
        }

        debug!(vertices = n, colors = self.num_colors(), "dsatur coloring complete");
    }

    /// Number of colors in use (one more than the largest color), or 0 if nothing is colored.
    pub fn num_colors(&self) -> usize {
        self.vertices.iter().filter_map(|v| v.color).max().map_or(0, |c| c + 1)
    }

    /// Returns whether every vertex is colored and no edge joins two equal colors.
    pub fn is_properly_colored(&self) -> bool {
        self.vertices.iter().all(|v| {
            v.color.is_some() && v.neighbors()
                .all(|u| self.vertices[self.slot_of_neighbor(u)].color != v.color)
        })
    }
}

/// Linear probe 0, 1, 2, ... for the first color not in `used`.
fn smallest_unused(used: &AHashSet<usize>) -> usize {
    let mut color = 0;
    while used.contains(&color) { color += 1 }
    color
}

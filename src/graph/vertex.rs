use ahash::AHashSet;

/// A vertex of the conflict graph.
///
/// Neighbors are stored by vertex index, not by position, so removing or
/// re-indexing other vertices never leaves a dangling reference behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub(super) index: usize,
    pub(crate) color: Option<usize>,     // None until colored
    pub(super) neighbors: AHashSet<usize>,
}

impl Vertex {
    /// A vertex is always created with an index, no color, and no neighbors.
    pub(super) fn new(index: usize) -> Self {
        Self { index, color: None, neighbors: AHashSet::new() }
    }

    /// Get the index of this vertex (its position in the input sequence).
    #[inline] pub fn index(&self) -> usize { self.index }

    /// Get the color of this vertex, or `None` if uncolored.
    #[inline] pub fn color(&self) -> Option<usize> { self.color }

    /// Get the number of neighbors of this vertex.
    #[inline] pub fn degree(&self) -> usize { self.neighbors.len() }

    /// Returns whether `index` is a neighbor of this vertex.
    #[inline] pub fn is_neighbor(&self, index: usize) -> bool { self.neighbors.contains(&index) }

    /// Iterate over the indices of this vertex's neighbors, in no particular order.
    #[inline]
    pub fn neighbors(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.iter().copied()
    }
}

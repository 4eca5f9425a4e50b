use ahash::{AHashMap, AHashSet};

use crate::{error::GraphError, graph::Vertex};

/// An undirected graph of uniquely indexed vertices.
///
/// Vertices are kept in insertion order (the storage order), which is the
/// final tie-break of the coloring engine. `slots` maps a vertex index to
/// its position in `vertices`.
#[derive(Debug, Default, Clone)]
pub struct ConflictGraph {
    pub(crate) vertices: Vec<Vertex>,
    slots: AHashMap<usize, usize>,
}

impl ConflictGraph {
    /// Create a graph with no vertices.
    pub fn new() -> Self { Self::default() }

    /// Create a graph with vertices `0..num_nodes` and no edges.
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            vertices: (0..num_nodes).map(Vertex::new).collect(),
            slots: (0..num_nodes).map(|i| (i, i)).collect(),
        }
    }

    /// Get the number of vertices in the graph.
    #[inline] pub fn len(&self) -> usize { self.vertices.len() }

    /// Returns whether the graph has no vertices.
    #[inline] pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Iterate over the vertices in storage order.
    #[inline]
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ { self.vertices.iter() }

    /// Returns whether a vertex with `index` exists.
    #[inline] pub fn contains_node(&self, index: usize) -> bool { self.slots.contains_key(&index) }

    /// Get the vertex with `index`, or `None` if there is no such vertex.
    #[inline]
    pub fn find_node(&self, index: usize) -> Option<&Vertex> {
        self.slots.get(&index).map(|&slot| &self.vertices[slot])
    }

    /// Get the vertex with `index`, failing if there is no such vertex.
    #[inline]
    pub fn node(&self, index: usize) -> Result<&Vertex, GraphError> {
        self.find_node(index).ok_or(GraphError::NodeNotFound(index))
    }

    /// Storage position of the vertex with `index`.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> Result<usize, GraphError> {
        self.slots.get(&index).copied().ok_or(GraphError::NodeNotFound(index))
    }

    /// Storage position of a vertex known to be present (e.g. a neighbor).
    #[inline]
    pub(crate) fn slot_of_neighbor(&self, index: usize) -> usize { self.slots[&index] }

    /// Add a vertex with `index` unless one already exists. Returns the new size.
    pub fn add_node(&mut self, index: usize) -> usize {
        if !self.contains_node(index) {
            self.slots.insert(index, self.vertices.len());
            self.vertices.push(Vertex::new(index));
        }
        self.len()
    }

    /// Remove the vertex with `index` and all of its edges. Returns the new size.
    ///
    /// The remaining vertices keep their relative storage order.
    pub fn remove_node(&mut self, index: usize) -> Result<usize, GraphError> {
        let slot = self.slot(index)?;
        let vertex = self.vertices.remove(slot);
        self.slots.remove(&index);
        for (pos, v) in self.vertices.iter().enumerate().skip(slot) {
            self.slots.insert(v.index, pos);
        }
        for neighbor in &vertex.neighbors {
            let ns = self.slot_of_neighbor(*neighbor);
            self.vertices[ns].neighbors.remove(&index);
        }
        Ok(self.len())
    }

    /// Change the index of a vertex, updating every neighbor's adjacency.
    pub fn set_index(&mut self, index: usize, new_index: usize) -> Result<(), GraphError> {
        let slot = self.slot(index)?;
        if index == new_index { return Ok(()) }
        if self.contains_node(new_index) { return Err(GraphError::DuplicateNode(new_index)) }

        let neighbors = self.vertices[slot].neighbors.iter().copied().collect::<Vec<_>>();
        for neighbor in neighbors {
            let ns = self.slot_of_neighbor(neighbor);
            self.vertices[ns].neighbors.remove(&index);
            self.vertices[ns].neighbors.insert(new_index);
        }
        self.slots.remove(&index);
        self.slots.insert(new_index, slot);
        self.vertices[slot].index = new_index;
        Ok(())
    }

    /// Link two vertices symmetrically. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<(), GraphError> {
        let (sa, sb) = (self.slot(a)?, self.slot(b)?);
        if sa == sb { return Err(GraphError::SelfLoop(a)) }
        self.link(sa, sb);
        Ok(())
    }

    /// Link the vertices at two distinct storage positions.
    pub(crate) fn link(&mut self, sa: usize, sb: usize) {
        debug_assert!(sa != sb, "self-loops are not allowed");
        let (a, b) = (self.vertices[sa].index, self.vertices[sb].index);
        self.vertices[sa].neighbors.insert(b);
        self.vertices[sb].neighbors.insert(a);
    }

    /// Unlink two vertices on both sides. Removing a missing edge is a no-op.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> Result<(), GraphError> {
        let (sa, sb) = (self.slot(a)?, self.slot(b)?);
        self.vertices[sa].neighbors.remove(&b);
        self.vertices[sb].neighbors.remove(&a);
        Ok(())
    }

    /// Returns whether there is an edge between two vertices.
    pub fn is_edge(&self, a: usize, b: usize) -> Result<bool, GraphError> {
        let (va, _) = (self.node(a)?, self.node(b)?);
        Ok(va.is_neighbor(b))
    }

    /// Get the total number of (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum::<usize>() / 2
    }

    /// Get the number of neighbors of a vertex.
    #[inline]
    pub fn degree(&self, index: usize) -> Result<usize, GraphError> {
        Ok(self.node(index)?.degree())
    }

    /// Get the number of distinct colors among a vertex's colored neighbors.
    pub fn saturation(&self, index: usize) -> Result<usize, GraphError> {
        let vertex = self.node(index)?;
        Ok(vertex.neighbors()
            .filter_map(|n| self.vertices[self.slot_of_neighbor(n)].color)
            .collect::<AHashSet<_>>()
            .len())
    }

    /// Returns whether no colored neighbor of a vertex already uses `color`.
    pub fn is_valid_color(&self, index: usize, color: usize) -> Result<bool, GraphError> {
        let vertex = self.node(index)?;
        Ok(vertex.neighbors()
            .all(|n| self.vertices[self.slot_of_neighbor(n)].color != Some(color)))
    }

    /// Assign a color to a vertex (or clear it with `None`).
    pub fn set_color(&mut self, index: usize, color: Option<usize>) -> Result<(), GraphError> {
        let slot = self.slot(index)?;
        self.vertices[slot].color = color;
        Ok(())
    }

    /// Mark every vertex uncolored.
    pub fn clear_colors(&mut self) {
        self.vertices.iter_mut().for_each(|v| v.color = None);
    }
}

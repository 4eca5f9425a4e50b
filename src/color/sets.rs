use crate::{error::GraphError, graph::ConflictGraph};

impl ConflictGraph {
    /// Group vertex indices by color.
    ///
    /// Group `c` lists, in storage order, the indices of every vertex colored `c`,
    /// for `c` in `0..=max_color`. Fails if any vertex is uncolored. This is a pure
    /// query and may be called any number of times.
    pub fn color_sets(&self) -> Result<Vec<Vec<usize>>, GraphError> {
        let mut sets: Vec<Vec<usize>> = Vec::new();
        for v in &self.vertices {
            let color = v.color.ok_or(GraphError::Uncolored(v.index()))?;
            if color >= sets.len() { sets.resize_with(color + 1, Vec::new) }
            sets[color].push(v.index());
        }
        Ok(sets)
    }
}

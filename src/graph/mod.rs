mod collisions;
mod graph;
mod vertex;

pub use collisions::{build_conflict_graph, build_conflict_graph_with, Broadphase};
pub use graph::ConflictGraph;
pub use vertex::Vertex;

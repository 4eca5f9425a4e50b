#![doc = "Split brush geometry into groups of pairwise non-intersecting bounding boxes"]
mod color;
mod error;
mod geom;
mod graph;
mod io;
mod map;
mod split;

#[doc(inline)]
pub use error::{GraphError, MapError};

#[doc(inline)]
pub use geom::{aabbs_from_coords, Aabb};

#[doc(inline)]
pub use graph::{build_conflict_graph, build_conflict_graph_with, Broadphase, ConflictGraph, Vertex};

#[doc(inline)]
pub use io::{parse_aabb_list, read_aabb_list};

#[doc(inline)]
pub use map::{
    brush_aabb, group_path, interior_base, render_exports, write_exports, write_group, MapDocument,
};

#[doc(inline)]
pub use split::{color_report, partition_aabbs, split_map, ColorReport, SplitOptions, SplitSummary};

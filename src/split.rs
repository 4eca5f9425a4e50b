use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{GraphError, MapError},
    geom::Aabb,
    graph::{build_conflict_graph_with, Broadphase},
    map::{group_path, interior_base, render_exports, write_exports, write_group, MapDocument},
};

/// Settings for [`split_map`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// How overlapping brush pairs are found.
    pub broadphase: Broadphase,
    /// Where to write the exports descriptor, if anywhere.
    pub exports: Option<PathBuf>,
    /// Prepended to the map name in each exported interior path.
    pub prefix: Option<String>,
    /// Extension of the compiled interiors named in the exports descriptor.
    pub interior_ext: String,
    /// Extension of the written group maps; the input's own when unset.
    pub group_ext: Option<String>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            broadphase: Broadphase::default(),
            exports: None,
            prefix: None,
            interior_ext: "dif".into(),
            group_ext: None,
        }
    }
}

/// What [`split_map`] did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    /// Number of brushes found in the input.
    pub brushes: usize,
    /// Brush indices per group, in group order.
    pub groups: Vec<Vec<usize>>,
    /// Path of each written group map, in group order.
    pub written: Vec<PathBuf>,
    /// Path of the exports descriptor, if one was written.
    pub exports: Option<PathBuf>,
}

/// Counts and groups for a coloring of a list of boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorReport {
    pub vertices: usize,
    pub edges: usize,
    pub colors: usize,
    pub groups: Vec<Vec<usize>>,
}

/// Partition `aabbs` into groups of pairwise non-intersecting boxes.
///
/// Each group lists input positions; group order follows color order.
pub fn partition_aabbs(aabbs: &[Aabb], broadphase: Broadphase) -> Result<Vec<Vec<usize>>, GraphError> {
    Ok(color_report(aabbs, broadphase)?.groups)
}

/// Build, color and partition the conflict graph of `aabbs`, keeping its counts.
pub fn color_report(aabbs: &[Aabb], broadphase: Broadphase) -> Result<ColorReport, GraphError> {
    let mut graph = build_conflict_graph_with(aabbs, broadphase);
    graph.color_dsatur();
    debug_assert!(graph.is_properly_colored(), "DSATUR produced an improper coloring");

    let groups = graph.color_sets()?;
    Ok(ColorReport {
        vertices: graph.len(),
        edges: graph.edge_count(),
        colors: groups.len(),
        groups,
    })
}

/// Split the map at `input` into one map per group of non-intersecting brushes.
///
/// Group `i` is written next to the input as `<name>-<i>.<ext>`; the exports
/// descriptor is written too when `options.exports` is set. Bytes outside the
/// vertex groups are copied through unchanged, whatever their encoding.
pub fn split_map(input: &Path, options: &SplitOptions) -> Result<SplitSummary, MapError> {
    let bytes = std::fs::read(input)
        .map_err(|source| MapError::Read { path: input.to_path_buf(), source })?;
    if bytes.is_empty() {
        return Err(MapError::EmptyInput { path: input.to_path_buf() });
    }

    let doc = MapDocument::parse(&bytes)?;
    info!(brushes = doc.len(), "found brushes in {}", input.display());

    let groups = partition_aabbs(&doc.aabbs()?, options.broadphase)?;
    info!(groups = groups.len(), "partitioned brushes");

    let mut written = Vec::with_capacity(groups.len());
    for (i, group) in groups.iter().enumerate() {
        let path = group_path(input, i, options.group_ext.as_deref());
        write_group(&path, &doc, group)?;
        debug!(group = i, brushes = group.len(), "wrote {}", path.display());
        written.push(path);
    }

    if let Some(exports) = &options.exports {
        let base = interior_base(input, options.prefix.as_deref());
        write_exports(exports, &render_exports(&base, groups.len(), &options.interior_ext))?;
        debug!("wrote exports to {}", exports.display());
    }

    Ok(SplitSummary {
        brushes: doc.len(),
        groups,
        written,
        exports: options.exports.clone(),
    })
}

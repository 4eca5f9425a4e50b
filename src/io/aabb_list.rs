//! AABB list reading operations.

use std::path::Path;

use crate::{error::MapError, geom::Aabb};

/// Reads an AABB list from `path`. See [`parse_aabb_list`].
pub fn read_aabb_list(path: &Path) -> Result<Vec<Aabb>, MapError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| MapError::Read { path: path.to_path_buf(), source })?;
    parse_aabb_list(&text)
}

/// Parses one box per non-blank line, written `x1 y1 z1 x2 y2 z2`.
pub fn parse_aabb_list(text: &str) -> Result<Vec<Aabb>, MapError> {
    text.lines().enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let invalid = || MapError::InvalidAabbLine { line: i + 1, text: line.trim().to_string() };
            let coords = line.split_whitespace()
                .map(|t| t.parse::<f64>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()?;
            let coords: [f64; 6] = coords.try_into().map_err(|_| invalid())?;
            Ok(Aabb::from_array(coords))
        })
        .collect()
}

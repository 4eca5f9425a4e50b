use tracing::{debug, warn};

use crate::{error::MapError, geom::Aabb};

/// A map split into its worldspawn header and brush blocks.
///
/// The first `{` opens the worldspawn. Text inside it, up to the first nested
/// `{`, is the header. Every block opened at depth two is a brush, kept verbatim
/// including its braces and anything nested inside it.
///
/// Map text is handled as raw bytes; only vertex coordinates are decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapDocument {
    header: Vec<u8>,
    brushes: Vec<Vec<u8>>,
}

impl MapDocument {
    /// Split map bytes into header and brushes, checking brace nesting.
    pub fn parse(bytes: &[u8]) -> Result<Self, MapError> {
        let mut header = Vec::new();
        let mut brushes = Vec::new();
        let mut current = Vec::new();
        let mut depth = 0usize;
        let mut found_header = false;
        let mut line = 1;

        for &byte in bytes {
            if byte == b'{' {
                depth += 1;
                if depth == 1 { continue } // worldspawn (or entity) opener
                if depth == 2 {
                    found_header = true;
                    current.clear();
                }
            }
            if depth == 1 && !found_header && byte != b'}' {
                header.push(byte);
            }
            if depth >= 2 {
                current.push(byte);
            }
            if byte == b'}' {
                depth = depth.checked_sub(1).ok_or(MapError::MismatchedBrace { line })?;
                if depth == 1 {
                    brushes.push(std::mem::take(&mut current));
                }
            }
            if byte == b'\n' { line += 1 }
        }

        if depth > 0 {
            return Err(MapError::UnclosedBrace { depth });
        }

        debug!(brushes = brushes.len(), header_len = header.len(), "parsed map text");
        Ok(Self { header, brushes })
    }

    /// Get the worldspawn header bytes (without its opening brace).
    #[inline] pub fn header(&self) -> &[u8] { &self.header }

    /// Get the brush blocks, in order of appearance.
    #[inline] pub fn brushes(&self) -> &[Vec<u8>] { &self.brushes }

    /// Get the number of brushes.
    #[inline] pub fn len(&self) -> usize { self.brushes.len() }

    /// Returns whether the map has no brushes.
    #[inline] pub fn is_empty(&self) -> bool { self.brushes.is_empty() }

    /// Bound every brush by its vertices, one box per brush.
    pub fn aabbs(&self) -> Result<Vec<Aabb>, MapError> {
        self.brushes.iter().enumerate()
            .map(|(i, brush)| brush_aabb(i, brush))
            .collect()
    }

    /// Render the map holding only the brushes listed in `group`.
    ///
    /// Fails with [`MapError::BrushOutOfRange`] if `group` names a brush the map lacks.
    pub fn render_group(&self, group: &[usize]) -> Result<Vec<u8>, MapError> {
        let mut out = Vec::with_capacity(self.header.len() + 2);
        out.push(b'{');
        out.extend_from_slice(&self.header);
        for &index in group {
            let brush = self.brushes.get(index)
                .ok_or(MapError::BrushOutOfRange { index, len: self.brushes.len() })?;
            out.extend_from_slice(brush);
            out.extend_from_slice(b"\r\n");
        }
        out.push(b'}');
        Ok(out)
    }
}

/// Bound a brush by the points written as `( x y z ... )` in its text.
///
/// Only the first three numbers of each parenthesized group are read. A brush
/// without any points yields [`Aabb::EMPTY`].
pub fn brush_aabb(brush: usize, text: &[u8]) -> Result<Aabb, MapError> {
    let mut points = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.iter().position(|&b| b == b'(') {
        let after = &rest[open + 1..];
        let Some(close) = after.iter().position(|&b| b == b')') else { break };
        // A second '(' before the ')' restarts the vertex.
        let inner = after[..close].rsplit(|&b| b == b'(').next().unwrap_or_default();
        points.push(parse_vertex(brush, inner)?);
        rest = &after[close + 1..];
    }

    if points.is_empty() {
        warn!(brush, "brush has no vertices; it will not conflict with anything");
    }
    Ok(Aabb::from_points(points))
}

fn parse_vertex(brush: usize, bytes: &[u8]) -> Result<[f64; 3], MapError> {
    let invalid = || MapError::InvalidVertex { brush, text: String::from_utf8_lossy(bytes).trim().to_string() };
    let text = std::str::from_utf8(bytes).map_err(|_| invalid())?;
    let mut coords = text.split_whitespace().map(str::parse::<f64>);
    let mut next = || coords.next().and_then(Result::ok).ok_or_else(invalid);
    Ok([next()?, next()?, next()?])
}

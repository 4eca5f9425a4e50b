//! Error types for graph construction, coloring and map text handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the conflict graph and the coloring engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge or lookup referenced a vertex index that is not in the graph.
    #[error("no vertex with index {0} in graph")]
    NodeNotFound(usize),

    /// A re-index would make two vertices share an index.
    #[error("a vertex with index {0} already exists")]
    DuplicateNode(usize),

    /// An edge from a vertex to itself was requested.
    #[error("self-loop requested on vertex {0}")]
    SelfLoop(usize),

    /// Color sets were requested while a vertex was still uncolored.
    #[error("vertex {0} is uncolored; run DSATUR before extracting color sets")]
    Uncolored(usize),
}

/// Errors raised while reading, parsing or writing map and AABB files.
#[derive(Debug, Error)]
pub enum MapError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    /// The input file was empty.
    #[error("invalid input file {}: file is empty", path.display())]
    EmptyInput { path: PathBuf },

    /// A closing brace appeared with no matching opening brace.
    #[error("mismatched end brace on line {line}")]
    MismatchedBrace { line: usize },

    /// The input ended while braces were still open.
    #[error("{depth} unclosed brace(s) at end of input")]
    UnclosedBrace { depth: usize },

    /// A parenthesized vertex did not hold three numbers.
    #[error("brush {brush}: invalid vertex \"({text})\"")]
    InvalidVertex { brush: usize, text: String },

    /// A group named a brush the map does not have.
    #[error("group refers to brush {index}, but the map has {len} brushes")]
    BrushOutOfRange { index: usize, len: usize },

    /// A line of an AABB list did not hold six numbers.
    #[error("line {line}: expected six numbers, found \"{text}\"")]
    InvalidAabbLine { line: usize, text: String },

    /// A split group map could not be written.
    #[error("could not write split map {}: {source}", path.display())]
    WriteGroup { path: PathBuf, source: std::io::Error },

    /// The exports descriptor could not be written.
    #[error("could not write exports file {}: {source}", path.display())]
    WriteExports { path: PathBuf, source: std::io::Error },

    /// The coloring engine rejected the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

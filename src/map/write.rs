use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{error::MapError, map::MapDocument};

/// Path of the map holding group `group`: `<input without extension>-<group>.<ext>`.
///
/// Without an `ext` override the input's own extension is kept, falling back to `map`.
pub fn group_path(input: &Path, group: usize, ext: Option<&str>) -> PathBuf {
    let ext = ext.or_else(|| input.extension().and_then(|e| e.to_str())).unwrap_or("map");
    let mut name = input.with_extension("").into_os_string();
    name.push(format!("-{group}.{ext}"));
    PathBuf::from(name)
}

/// Write the map holding only the brushes in `group` to `path`.
///
/// Nothing is created when `group` names a brush the map lacks.
pub fn write_group(path: &Path, doc: &MapDocument, group: &[usize]) -> Result<(), MapError> {
    let contents = doc.render_group(group)?;
    let wrap = |source| MapError::WriteGroup { path: path.to_path_buf(), source };
    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    writer.write_all(&contents).map_err(wrap)?;
    writer.flush().map_err(wrap)
}

/// Base name each exported interior refers to: `<prefix><input stem>`, with forward slashes.
pub fn interior_base(input: &Path, prefix: Option<&str>) -> String {
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    format!("{}{}", prefix.unwrap_or_default(), stem).replace('\\', "/")
}

/// Render one `InteriorInstance` block per group, referring to `<base>-<i>.<ext>`.
pub fn render_exports(base: &str, num_groups: usize, ext: &str) -> String {
    (0..num_groups).map(|i| format!(
        "   new InteriorInstance() {{\n\
        \x20     position = \"0 0 0\";\n\
        \x20     rotation = \"1 0 0 0\";\n\
        \x20     scale = \"1 1 1\";\n\
        \x20     interiorFile = \"{base}-{i}.{ext}\";\n\
        \x20     showTerrainInside = \"1\";\n\
        \x20  }};\n"
    )).collect()
}

/// Write the exports descriptor to `path`.
pub fn write_exports(path: &Path, contents: &str) -> Result<(), MapError> {
    std::fs::write(path, contents)
        .map_err(|source| MapError::WriteExports { path: path.to_path_buf(), source })
}

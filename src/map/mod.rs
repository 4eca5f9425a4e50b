mod parse;
mod write;

pub use parse::{brush_aabb, MapDocument};
pub use write::{group_path, interior_base, render_exports, write_exports, write_group};

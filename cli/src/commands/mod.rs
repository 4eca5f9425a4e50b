pub mod color;
pub mod split;

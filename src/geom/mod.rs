mod aabb;
mod bbox;

pub use aabb::{aabbs_from_coords, Aabb};
pub(crate) use bbox::{envelope_of, BoundingBox};

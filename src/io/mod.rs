//! IO module for plain-text inputs that bypass the map parser.
//!
//! - `aabb_list` - one box per line as six whitespace-separated numbers

mod aabb_list;

pub use aabb_list::{parse_aabb_list, read_aabb_list};

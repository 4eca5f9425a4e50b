use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box given by its min and max corners.
///
/// Bounds are taken as given: callers supply `min <= max` per axis. The one
/// exception is [`Aabb::EMPTY`], whose inverted bounds never intersect anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    min: [f64; 3],
    max: [f64; 3],
}

impl Aabb {
    /// The box around zero points. Intersects nothing, not even itself.
    pub const EMPTY: Self = Self {
        min: [f64::INFINITY; 3],
        max: [f64::NEG_INFINITY; 3],
    };

    /// Construct a box from its six bounds.
    pub fn new(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> Self {
        Self { min: [x1, y1, z1], max: [x2, y2, z2] }
    }

    /// Construct a box from `[x1, y1, z1, x2, y2, z2]`.
    pub fn from_array(c: [f64; 6]) -> Self {
        Self::new(c[0], c[1], c[2], c[3], c[4], c[5])
    }

    /// Smallest box containing every point, or [`Aabb::EMPTY`] if there are none.
    pub fn from_points(points: impl IntoIterator<Item = [f64; 3]>) -> Self {
        points.into_iter().fold(Self::EMPTY, |mut acc, p| {
            for axis in 0..3 {
                acc.min[axis] = acc.min[axis].min(p[axis]);
                acc.max[axis] = acc.max[axis].max(p[axis]);
            }
            acc
        })
    }

    #[inline] pub fn min(&self) -> [f64; 3] { self.min }

    #[inline] pub fn max(&self) -> [f64; 3] { self.max }

    /// True if this box holds no points (some axis has `min > max`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..3).any(|axis| self.min[axis] > self.max[axis])
    }

    /// Returns whether the two boxes overlap on every axis. Touching counts.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        (0..3).all(|axis| self.min[axis] <= other.max[axis] && self.max[axis] >= other.min[axis])
    }
}

/// Build boxes from rows of `[x1, y1, z1, x2, y2, z2]`.
pub fn aabbs_from_coords(coords: &[[f64; 6]]) -> Vec<Aabb> {
    coords.iter().copied().map(Aabb::from_array).collect()
}

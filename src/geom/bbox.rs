use rstar::{RTreeObject, AABB};

use crate::geom::Aabb;

/// A bounding box in an R-tree, associated with its input position by index.
#[derive(Debug, Clone)]
pub(crate) struct BoundingBox {
    idx: usize, // Position of the box in the input sequence
    aabb: Aabb,
}

impl BoundingBox {
    pub(crate) fn new(idx: usize, aabb: Aabb) -> Self {
        Self { idx, aabb }
    }

    /// Get the input position of this box.
    #[inline] pub(crate) fn idx(&self) -> usize { self.idx }

    /// Get a reference to the wrapped box.
    #[inline] pub(crate) fn aabb(&self) -> &Aabb { &self.aabb }
}

/// Envelope of a non-empty box. Empty boxes must stay out of the tree.
#[inline]
pub(crate) fn envelope_of(aabb: &Aabb) -> AABB<[f64; 3]> {
    AABB::from_corners(aabb.min(), aabb.max())
}

impl RTreeObject for BoundingBox {
    type Envelope = AABB<[f64; 3]>;

    fn envelope(&self) -> Self::Envelope { envelope_of(&self.aabb) }
}

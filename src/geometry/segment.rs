//! Geometry of a straight line segment

use super::sub_geometry;
use crate::reference_element::RefEl;
use crate::traits::Geometry;
use crate::types::{RealScalar, DIM_WORLD};

/// An affine map from \[0,1\] to a straight segment
#[derive(Debug, Clone)]
pub struct SegmentGeometry<T: RealScalar> {
    vertices: [[T; DIM_WORLD]; 2],
}

impl<T: RealScalar> SegmentGeometry<T> {
    /// Create a segment geometry from its start and end points
    pub fn new(vertices: [[T; DIM_WORLD]; 2]) -> Self {
        Self { vertices }
    }

    /// The start and end points
    pub fn vertices(&self) -> &[[T; DIM_WORLD]; 2] {
        &self.vertices
    }

    fn tangent(&self) -> [T; DIM_WORLD] {
        [
            self.vertices[1][0] - self.vertices[0][0],
            self.vertices[1][1] - self.vertices[0][1],
        ]
    }
}

impl<T: RealScalar> Geometry<T> for SegmentGeometry<T> {
    fn ref_el(&self) -> RefEl {
        RefEl::Segment
    }

    fn global(&self, local: &[T]) -> [T; DIM_WORLD] {
        let t = self.tangent();
        [
            self.vertices[0][0] + t[0] * local[0],
            self.vertices[0][1] + t[1] * local[0],
        ]
    }

    fn jacobian(&self, _local: &[T], value: &mut [T]) {
        value.copy_from_slice(&self.tangent());
    }

    fn integration_element(&self, _local: &[T]) -> T {
        let t = self.tangent();
        t[0].hypot(t[1])
    }

    fn is_affine(&self) -> bool {
        true
    }

    fn sub_geometry(&self, rel_codim: usize, i: usize) -> Box<dyn Geometry<T>> {
        sub_geometry(RefEl::Segment, &self.vertices, rel_codim, i)
    }

    fn box_clone(&self) -> Box<dyn Geometry<T>> {
        Box::new(self.clone())
    }
}

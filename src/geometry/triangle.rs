//! Geometry of a straight-sided triangle

use super::sub_geometry;
use crate::reference_element::RefEl;
use crate::traits::Geometry;
use crate::types::{RealScalar, DIM_WORLD};

/// An affine map from the reference triangle
#[derive(Debug, Clone)]
pub struct TriangleGeometry<T: RealScalar> {
    vertices: [[T; DIM_WORLD]; 3],
}

impl<T: RealScalar> TriangleGeometry<T> {
    /// Create a triangle geometry from its three corners
    pub fn new(vertices: [[T; DIM_WORLD]; 3]) -> Self {
        Self { vertices }
    }

    /// The corners
    pub fn vertices(&self) -> &[[T; DIM_WORLD]; 3] {
        &self.vertices
    }

    fn columns(&self) -> [[T; DIM_WORLD]; 2] {
        let [v0, v1, v2] = self.vertices;
        [[v1[0] - v0[0], v1[1] - v0[1]], [v2[0] - v0[0], v2[1] - v0[1]]]
    }
}

impl<T: RealScalar> Geometry<T> for TriangleGeometry<T> {
    fn ref_el(&self) -> RefEl {
        RefEl::Triangle
    }

    fn global(&self, local: &[T]) -> [T; DIM_WORLD] {
        let [a, b] = self.columns();
        let v0 = self.vertices[0];
        [
            v0[0] + a[0] * local[0] + b[0] * local[1],
            v0[1] + a[1] * local[0] + b[1] * local[1],
        ]
    }

    fn jacobian(&self, _local: &[T], value: &mut [T]) {
        let [a, b] = self.columns();
        value.copy_from_slice(&[a[0], a[1], b[0], b[1]]);
    }

    fn integration_element(&self, _local: &[T]) -> T {
        let [a, b] = self.columns();
        (a[0] * b[1] - a[1] * b[0]).abs()
    }

    fn is_affine(&self) -> bool {
        true
    }

    fn sub_geometry(&self, rel_codim: usize, i: usize) -> Box<dyn Geometry<T>> {
        sub_geometry(RefEl::Triangle, &self.vertices, rel_codim, i)
    }

    fn box_clone(&self) -> Box<dyn Geometry<T>> {
        Box::new(self.clone())
    }
}

//! Geometry of a straight-sided quadrilateral

use super::sub_geometry;
use crate::reference_element::RefEl;
use crate::traits::Geometry;
use crate::types::{RealScalar, DIM_WORLD};

/// A bilinear map from the reference square
///
/// The corners are numbered counter-clockwise, so the reference point (x, y) is mapped to
/// `v0 (1-x)(1-y) + v1 x(1-y) + v2 xy + v3 (1-x)y`.
#[derive(Debug, Clone)]
pub struct QuadrilateralGeometry<T: RealScalar> {
    vertices: [[T; DIM_WORLD]; 4],
}

impl<T: RealScalar> QuadrilateralGeometry<T> {
    /// Create a quadrilateral geometry from its four corners
    pub fn new(vertices: [[T; DIM_WORLD]; 4]) -> Self {
        Self { vertices }
    }

    /// The corners
    pub fn vertices(&self) -> &[[T; DIM_WORLD]; 4] {
        &self.vertices
    }

    /// Derivatives of the map with respect to x and y
    fn derivatives(&self, local: &[T]) -> [[T; DIM_WORLD]; 2] {
        let [v0, v1, v2, v3] = self.vertices;
        let (x, y) = (local[0], local[1]);
        let mut d = [[T::zero(); DIM_WORLD]; 2];
        for j in 0..DIM_WORLD {
            let twist = v0[j] - v1[j] + v2[j] - v3[j];
            d[0][j] = v1[j] - v0[j] + twist * y;
            d[1][j] = v3[j] - v0[j] + twist * x;
        }
        d
    }
}

impl<T: RealScalar> Geometry<T> for QuadrilateralGeometry<T> {
    fn ref_el(&self) -> RefEl {
        RefEl::Quadrilateral
    }

    fn global(&self, local: &[T]) -> [T; DIM_WORLD] {
        let [v0, v1, v2, v3] = self.vertices;
        let (x, y) = (local[0], local[1]);
        let one = T::one();
        let mut point = [T::zero(); DIM_WORLD];
        for (j, p) in point.iter_mut().enumerate() {
            *p = v0[j] * (one - x) * (one - y)
                + v1[j] * x * (one - y)
                + v2[j] * x * y
                + v3[j] * (one - x) * y;
        }
        point
    }

    fn jacobian(&self, local: &[T], value: &mut [T]) {
        let [dx, dy] = self.derivatives(local);
        value.copy_from_slice(&[dx[0], dx[1], dy[0], dy[1]]);
    }

    fn integration_element(&self, local: &[T]) -> T {
        let [dx, dy] = self.derivatives(local);
        (dx[0] * dy[1] - dx[1] * dy[0]).abs()
    }

    fn is_affine(&self) -> bool {
        let [v0, v1, v2, v3] = self.vertices;
        (0..DIM_WORLD).all(|j| v0[j] - v1[j] + v2[j] - v3[j] == T::zero())
    }

    fn sub_geometry(&self, rel_codim: usize, i: usize) -> Box<dyn Geometry<T>> {
        sub_geometry(RefEl::Quadrilateral, &self.vertices, rel_codim, i)
    }

    fn box_clone(&self) -> Box<dyn Geometry<T>> {
        Box::new(self.clone())
    }
}

//! Geometry of a point

use crate::reference_element::RefEl;
use crate::traits::Geometry;
use crate::types::{RealScalar, DIM_WORLD};

/// A point in physical space
#[derive(Debug, Clone)]
pub struct PointGeometry<T: RealScalar> {
    coords: [T; DIM_WORLD],
}

impl<T: RealScalar> PointGeometry<T> {
    /// Create a point geometry
    pub fn new(coords: [T; DIM_WORLD]) -> Self {
        Self { coords }
    }

    /// The coordinates of the point
    pub fn coords(&self) -> [T; DIM_WORLD] {
        self.coords
    }
}

impl<T: RealScalar> Geometry<T> for PointGeometry<T> {
    fn ref_el(&self) -> RefEl {
        RefEl::Point
    }

    fn global(&self, local: &[T]) -> [T; DIM_WORLD] {
        debug_assert!(local.is_empty());
        self.coords
    }

    fn jacobian(&self, _local: &[T], value: &mut [T]) {
        debug_assert!(value.is_empty());
    }

    fn integration_element(&self, _local: &[T]) -> T {
        T::one()
    }

    fn is_affine(&self) -> bool {
        true
    }

    fn sub_geometry(&self, rel_codim: usize, i: usize) -> Box<dyn Geometry<T>> {
        if rel_codim != 0 || i != 0 {
            panic!("A point has no sub-entity {i} of relative codimension {rel_codim}");
        }
        self.box_clone()
    }

    fn box_clone(&self) -> Box<dyn Geometry<T>> {
        Box::new(self.clone())
    }
}

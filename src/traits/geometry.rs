//! Map from reference to physical space.

use crate::reference_element::RefEl;
use crate::types::{RealScalar, DIM_WORLD};

pub trait Geometry<T: RealScalar>: Send + Sync {
    //! The shape of a single entity

    /// The topological/domain dimension
    fn dim_local(&self) -> usize {
        self.ref_el().dimension()
    }

    /// The geometric/physical dimension
    fn dim_global(&self) -> usize {
        DIM_WORLD
    }

    /// The reference element that this geometry maps from
    fn ref_el(&self) -> RefEl;

    /// Map a point on the reference element to physical space
    ///
    /// `local` should have length `dim_local()`.
    fn global(&self, local: &[T]) -> [T; DIM_WORLD];

    /// Write the jacobian at a point on the reference element into `value`
    ///
    /// `value` should have shape [dim_global, dim_local] and use column-major ordering
    fn jacobian(&self, local: &[T], value: &mut [T]);

    /// The ratio between physical and reference volume elements at a point
    fn integration_element(&self, local: &[T]) -> T;

    /// Is the map affine?
    fn is_affine(&self) -> bool;

    /// Geometry of sub-entity `i` of relative codimension `rel_codim`
    fn sub_geometry(&self, rel_codim: usize, i: usize) -> Box<dyn Geometry<T>>;

    /// Copy the geometry into a new box
    fn box_clone(&self) -> Box<dyn Geometry<T>>;
}

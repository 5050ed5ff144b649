//! Mesh builder
use crate::reference_element::RefEl;
use crate::traits::Geometry;
use crate::types::{RealScalar, Result, DIM_WORLD};

pub trait Builder {
    //! Object that can be used to build a mesh

    /// The floating point type used for coordinates
    type T: RealScalar;
    /// The type of the mesh that the builder creates
    type Mesh;

    /// The geometric/physical dimension
    fn dim_world(&self) -> usize {
        DIM_WORLD
    }

    /// Add a point to the mesh and return its index
    ///
    /// Points with identical coordinates are not merged: deduplicating the input is the
    /// caller's responsibility.
    fn add_point(&mut self, coords: [Self::T; DIM_WORLD]) -> usize;

    /// Add an entity with the given vertices to the mesh and return its index
    ///
    /// `nodes` must list the vertex indices in the order of the reference element's nodes. If
    /// `geometry` is `None`, a geometry is created from the vertex coordinates.
    fn add_entity(
        &mut self,
        ref_el: RefEl,
        nodes: &[usize],
        geometry: Option<Box<dyn Geometry<Self::T>>>,
    ) -> Result<usize>;

    /// Create the mesh
    ///
    /// This can only be called once: the builder cannot be used after the mesh is created.
    fn build(&mut self) -> Self::Mesh;
}

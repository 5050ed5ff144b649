//! Geometry of mesh entities
//!
//! Each entity owns one geometry object, which maps points on its reference element to
//! physical space. Points are constant, segments and triangles are affine, and
//! quadrilaterals are bilinear.

mod point;
mod quadrilateral;
mod segment;
mod triangle;

pub use point::PointGeometry;
pub use quadrilateral::QuadrilateralGeometry;
pub use segment::SegmentGeometry;
pub use triangle::TriangleGeometry;

use crate::reference_element::RefEl;
use crate::traits::Geometry;
use crate::types::{RealScalar, DIM_WORLD};

/// Create the straight-sided geometry of a reference element from its corner coordinates
pub fn create_geometry<T: RealScalar>(
    ref_el: RefEl,
    vertices: &[[T; DIM_WORLD]],
) -> Box<dyn Geometry<T>> {
    if vertices.len() != ref_el.num_nodes() {
        panic!(
            "{ref_el} geometry needs {} vertices, got {}",
            ref_el.num_nodes(),
            vertices.len()
        );
    }
    match ref_el {
        RefEl::Point => Box::new(PointGeometry::new(vertices[0])),
        RefEl::Segment => Box::new(SegmentGeometry::new([vertices[0], vertices[1]])),
        RefEl::Triangle => Box::new(TriangleGeometry::new([
            vertices[0],
            vertices[1],
            vertices[2],
        ])),
        RefEl::Quadrilateral => Box::new(QuadrilateralGeometry::new([
            vertices[0],
            vertices[1],
            vertices[2],
            vertices[3],
        ])),
    }
}

/// Geometry of a sub-entity of a straight-sided entity
fn sub_geometry<T: RealScalar>(
    ref_el: RefEl,
    vertices: &[[T; DIM_WORLD]],
    rel_codim: usize,
    i: usize,
) -> Box<dyn Geometry<T>> {
    let sub_vertices = ref_el
        .sub_entity_nodes(rel_codim, i)
        .iter()
        .map(|n| vertices[*n])
        .collect::<Vec<_>>();
    create_geometry(ref_el.sub_type(rel_codim, i), &sub_vertices)
}

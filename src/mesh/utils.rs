//! Topology queries built on top of the entity interface

use crate::mesh::hybrid2d::Mesh;
use crate::types::{Error, RealScalar, Result};

/// Count the cells that each entity of codimension `codim` belongs to
pub fn super_entity_counts<T: RealScalar>(mesh: &Mesh<T>, codim: usize) -> Vec<usize> {
    let mut counts = vec![0; mesh.size(codim)];
    for cell in mesh.entities(0) {
        for e in cell.sub_entities(codim) {
            counts[e.index()] += 1;
        }
    }
    counts
}

/// Flag the entities of codimension `codim` that lie on the boundary
///
/// An edge is on the boundary if it belongs to exactly one cell. A vertex is on the boundary
/// if it is an end point of a boundary edge, and a cell is on the boundary if one of its
/// edges is.
pub fn boundary_flags<T: RealScalar>(mesh: &Mesh<T>, codim: usize) -> Vec<bool> {
    let edge_flags = super_entity_counts(mesh, 1)
        .into_iter()
        .map(|c| c == 1)
        .collect::<Vec<_>>();
    match codim {
        0 => mesh
            .entities(0)
            .map(|c| c.sub_entities(1).any(|e| edge_flags[e.index()]))
            .collect(),
        1 => edge_flags,
        2 => {
            let mut flags = vec![false; mesh.size(2)];
            for e in mesh.entities(1).filter(|e| edge_flags[e.index()]) {
                for v in e.sub_entities(1) {
                    flags[v.index()] = true;
                }
            }
            flags
        }
        _ => panic!("Codimension {codim} out of range for a 2D mesh"),
    }
}

/// Check that every edge and vertex of the mesh belongs to at least one cell
pub fn check_completeness<T: RealScalar>(mesh: &Mesh<T>) -> Result<()> {
    for codim in 1..3 {
        if let Some(index) = super_entity_counts(mesh, codim)
            .iter()
            .position(|c| *c == 0)
        {
            return Err(Error::OrphanEntity { codim, index });
        }
    }
    Ok(())
}

//! Hybrid 2D mesh

use super::{Entity, EntityData, EntityIter, SubEntityIndices};
use crate::types::{Error, RealScalar, Result, DIM_WORLD};
use rayon::prelude::*;
use std::collections::HashMap;
use std::ops::Range;

/// A mesh of triangles and quadrilaterals
///
/// The mesh owns all of its cells (codimension 0), edges (codimension 1) and vertices
/// (codimension 2). Entities are numbered densely from zero within each codimension, and
/// these indices never change once the mesh has been built.
pub struct Mesh<T: RealScalar> {
    cells: Vec<EntityData<T>>,
    edges: Vec<EntityData<T>>,
    vertices: Vec<EntityData<T>>,
}

impl<T: RealScalar> Mesh<T> {
    pub(crate) fn new(
        cells: Vec<EntityData<T>>,
        edges: Vec<EntityData<T>>,
        vertices: Vec<EntityData<T>>,
    ) -> Self {
        Self {
            cells,
            edges,
            vertices,
        }
    }

    pub(crate) fn storage(&self, codim: usize) -> &[EntityData<T>] {
        match codim {
            0 => &self.cells,
            1 => &self.edges,
            2 => &self.vertices,
            _ => panic!("Codimension {codim} out of range for a 2D mesh"),
        }
    }

    /// The topological dimension of the mesh
    pub fn dim_mesh(&self) -> usize {
        2
    }

    /// The geometric/physical dimension
    pub fn dim_world(&self) -> usize {
        DIM_WORLD
    }

    /// The number of entities of codimension `codim`
    pub fn size(&self, codim: usize) -> usize {
        self.storage(codim).len()
    }

    /// Iterate over all entities of codimension `codim` in index order
    pub fn entities(&self, codim: usize) -> EntityIter<'_, T, Range<usize>> {
        EntityIter::new(0..self.size(codim), self, codim)
    }

    /// Get the entity of codimension `codim` with index `index`
    pub fn entity(&self, codim: usize, index: usize) -> Option<Entity<'_, T>> {
        if index < self.size(codim) {
            Some(Entity::new(self, codim, index))
        } else {
            None
        }
    }

    /// The index of an entity of this mesh
    pub fn index(&self, entity: &Entity<'_, T>) -> usize {
        if !self.contains(entity) {
            panic!("Cannot index an entity that belongs to a different mesh");
        }
        entity.index()
    }

    /// Does this entity belong to this mesh?
    pub fn contains(&self, entity: &Entity<'_, T>) -> bool {
        std::ptr::eq(entity.mesh(), self)
    }

    /// Check the topology of the mesh
    ///
    /// This checks that every sub-entity index is in range, that the end points of every edge
    /// of a cell are vertices of that cell, and that no two edges join the same pair of
    /// vertices.
    pub fn check_consistency(&self) -> Result<()> {
        (0..self.cells.len())
            .into_par_iter()
            .try_for_each(|cell| self.check_cell(cell))?;
        (0..self.edges.len())
            .into_par_iter()
            .try_for_each(|edge| self.check_sub_entity_range(1, edge))?;

        let mut edge_indices = HashMap::with_capacity(self.edges.len());
        for (index, edge) in self.edges.iter().enumerate() {
            let v = edge.sub_entities.indices(2);
            if let Some(first) = edge_indices.insert((v[0].min(v[1]), v[0].max(v[1])), index) {
                return Err(Error::DuplicateEdge {
                    first,
                    second: index,
                });
            }
        }
        Ok(())
    }

    fn check_sub_entity_range(&self, codim: usize, index: usize) -> Result<()> {
        let sub_entities = &self.storage(codim)[index].sub_entities;
        for sub_codim in codim + 1..3 {
            let size = self.size(sub_codim);
            if let Some(sub_index) = sub_entities
                .indices(sub_codim)
                .iter()
                .find(|i| **i >= size)
            {
                return Err(Error::SubEntityOutOfRange {
                    codim,
                    index,
                    sub_codim,
                    sub_index: *sub_index,
                    size,
                });
            }
        }
        Ok(())
    }

    fn check_cell(&self, cell: usize) -> Result<()> {
        self.check_sub_entity_range(0, cell)?;
        if let SubEntityIndices::Cell { edges, vertices } = &self.cells[cell].sub_entities {
            for edge in edges {
                let ends = self.edges[*edge].sub_entities.indices(2);
                if !ends.iter().all(|v| vertices.contains(v)) {
                    return Err(Error::EdgeNotInCell { cell, edge: *edge });
                }
            }
        }
        Ok(())
    }
}

impl<T: RealScalar> std::fmt::Debug for Mesh<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mesh")
            .field("cells", &self.cells.len())
            .field("edges", &self.edges.len())
            .field("vertices", &self.vertices.len())
            .finish()
    }
}

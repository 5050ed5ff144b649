//! Entities of a hybrid 2D mesh

use super::Mesh;
use crate::reference_element::RefEl;
use crate::traits::Geometry;
use crate::types::{Orientation, RealScalar};
use itertools::Either;
use std::iter::{Copied, Once};

/// Indices of the sub-entities of a stored entity
pub(crate) enum SubEntityIndices {
    /// Bounding edges and vertices of a cell, in reference element order
    Cell {
        edges: Vec<usize>,
        vertices: Vec<usize>,
    },
    /// Start and end vertex of an edge
    Edge { vertices: [usize; 2] },
    Vertex,
}

impl SubEntityIndices {
    /// The stored indices of the sub-entities of (absolute) codimension `codim`
    pub(crate) fn indices(&self, codim: usize) -> &[usize] {
        match (self, codim) {
            (SubEntityIndices::Cell { edges, .. }, 1) => edges.as_slice(),
            (SubEntityIndices::Cell { vertices, .. }, 2) => vertices.as_slice(),
            (SubEntityIndices::Edge { vertices }, 2) => vertices.as_slice(),
            _ => panic!("No sub-entities of codimension {codim} are stored for this entity"),
        }
    }
}

/// Storage slot for one entity, owned by the mesh
pub(crate) struct EntityData<T: RealScalar> {
    pub(crate) geometry: Box<dyn Geometry<T>>,
    pub(crate) sub_entities: SubEntityIndices,
}

/// A handle to an entity of a [`Mesh`]
///
/// Handles are cheap to copy. Two handles compare equal if and only if they refer to the same
/// storage slot of the same mesh.
#[derive(Clone, Copy)]
pub struct Entity<'a, T: RealScalar> {
    mesh: &'a Mesh<T>,
    codim: usize,
    index: usize,
}

impl<'a, T: RealScalar> Entity<'a, T> {
    pub(crate) fn new(mesh: &'a Mesh<T>, codim: usize, index: usize) -> Self {
        Self { mesh, codim, index }
    }

    fn data(&self) -> &'a EntityData<T> {
        &self.mesh.storage(self.codim)[self.index]
    }

    /// The codimension: 0 for cells, 1 for edges, 2 for vertices
    pub fn codim(&self) -> usize {
        self.codim
    }

    /// The index of this entity among the entities of the same codimension
    pub fn index(&self) -> usize {
        self.index
    }

    /// The mesh that this entity belongs to
    pub fn mesh(&self) -> &'a Mesh<T> {
        self.mesh
    }

    /// The reference element of this entity
    pub fn ref_el(&self) -> RefEl {
        match self.codim {
            0 => match self.data().sub_entities.indices(2).len() {
                3 => RefEl::Triangle,
                4 => RefEl::Quadrilateral,
                n => panic!("Cell {} has {n} vertices; cells must have 3 or 4", self.index),
            },
            1 => RefEl::Segment,
            2 => RefEl::Point,
            _ => panic!("Codimension {} out of range", self.codim),
        }
    }

    /// The geometry of this entity
    pub fn geometry(&self) -> &'a dyn Geometry<T> {
        self.data().geometry.as_ref()
    }

    /// Iterate over the sub-entities of relative codimension `rel_codim`
    ///
    /// An entity is its own (only) sub-entity of relative codimension 0. The sub-entities are
    /// yielded in the order given by the reference element.
    pub fn sub_entities(&self, rel_codim: usize) -> SubEntities<'a, T> {
        let indices = match (2 - self.codim).checked_sub(rel_codim) {
            Some(_) if rel_codim == 0 => Either::Left(std::iter::once(self.index)),
            Some(1) => Either::Right(self.data().sub_entities.indices(1).iter().copied()),
            Some(0) => Either::Right(self.data().sub_entities.indices(2).iter().copied()),
            _ => panic!(
                "Codim {} entity has no sub-entities of relative codimension {rel_codim}",
                self.codim
            ),
        };
        EntityIter::new(indices, self.mesh, self.codim + rel_codim)
    }

    /// The orientation of each edge of a cell relative to the cell's local edge
    ///
    /// For edges and vertices, this is empty.
    pub fn relative_orientations(&self) -> Vec<Orientation> {
        match &self.data().sub_entities {
            SubEntityIndices::Cell { edges, vertices } => {
                let ref_el = self.ref_el();
                edges
                    .iter()
                    .enumerate()
                    .map(|(local_index, edge)| {
                        let start = vertices[ref_el.sub_entity_nodes(1, local_index)[0]];
                        if self.mesh.storage(1)[*edge].sub_entities.indices(2)[0] == start {
                            Orientation::Positive
                        } else {
                            Orientation::Negative
                        }
                    })
                    .collect()
            }
            _ => vec![],
        }
    }
}

impl<T: RealScalar> PartialEq for Entity<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.data(), other.data())
    }
}

impl<T: RealScalar> Eq for Entity<'_, T> {}

impl<T: RealScalar> std::hash::Hash for Entity<'_, T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.data(), state)
    }
}

impl<T: RealScalar> std::fmt::Debug for Entity<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("codim", &self.codim)
            .field("index", &self.index)
            .finish()
    }
}

impl<T: RealScalar> std::fmt::Display for Entity<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ref_el())
    }
}

/// An iterator over entities of one codimension
pub struct EntityIter<'a, T: RealScalar, Iter: std::iter::Iterator<Item = usize>> {
    iter: Iter,
    mesh: &'a Mesh<T>,
    codim: usize,
}

/// The iterator returned by [`Entity::sub_entities`]
pub type SubEntities<'a, T> =
    EntityIter<'a, T, Either<Once<usize>, Copied<std::slice::Iter<'a, usize>>>>;

impl<'a, T: RealScalar, Iter: std::iter::Iterator<Item = usize>> EntityIter<'a, T, Iter> {
    /// Create an entity iterator
    pub(crate) fn new(iter: Iter, mesh: &'a Mesh<T>, codim: usize) -> Self {
        EntityIter { iter, mesh, codim }
    }
}

impl<'a, T: RealScalar, Iter: std::iter::Iterator<Item = usize>> std::iter::Iterator
    for EntityIter<'a, T, Iter>
{
    type Item = Entity<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|index| Entity::new(self.mesh, self.codim, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T: RealScalar, Iter: std::iter::ExactSizeIterator<Item = usize>> std::iter::ExactSizeIterator
    for EntityIter<'_, T, Iter>
{
}

impl<T: RealScalar, Iter: std::iter::DoubleEndedIterator<Item = usize>>
    std::iter::DoubleEndedIterator for EntityIter<'_, T, Iter>
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter
            .next_back()
            .map(|index| Entity::new(self.mesh, self.codim, index))
    }
}

impl<T: RealScalar, Iter: std::iter::Iterator<Item = usize> + Clone> Clone
    for EntityIter<'_, T, Iter>
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            mesh: self.mesh,
            codim: self.codim,
        }
    }
}

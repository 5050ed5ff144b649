//! Mesh factory

use super::{EntityData, Mesh, SubEntityIndices};
use crate::geometry::{create_geometry, PointGeometry, SegmentGeometry};
use crate::reference_element::RefEl;
use crate::traits::{Builder, Geometry};
use crate::types::{Error, RealScalar, Result, DIM_WORLD};
use itertools::Itertools;
use log::{debug, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Staging,
    Built,
}

struct StagedEdge<T: RealScalar> {
    vertices: [usize; 2],
    geometry: Box<dyn Geometry<T>>,
}

struct StagedCell<T: RealScalar> {
    vertices: Vec<usize>,
    edges: Vec<usize>,
    geometry: Box<dyn Geometry<T>>,
}

/// Builder for a hybrid 2D [`Mesh`]
///
/// Points and cells are added one at a time. Whenever a cell is added, the edges of its
/// reference element are looked up by their (unordered) pair of end points, so that
/// neighbouring cells share a single edge. Edges can also be added explicitly to give them
/// a geometry of their own.
pub struct MeshFactory<T: RealScalar> {
    state: State,
    points: Vec<[T; DIM_WORLD]>,
    edges: Vec<StagedEdge<T>>,
    cells: Vec<StagedCell<T>>,
    edge_indices: HashMap<(usize, usize), usize>,
}

impl<T: RealScalar> MeshFactory<T> {
    /// Create a new mesh factory
    pub fn new() -> Self {
        Self {
            state: State::Staging,
            points: vec![],
            edges: vec![],
            cells: vec![],
            edge_indices: HashMap::new(),
        }
    }

    /// Create a new mesh factory with capacity for a given number of points and cells
    pub fn new_with_capacity(npoints: usize, ncells: usize) -> Self {
        Self {
            state: State::Staging,
            points: Vec::with_capacity(npoints),
            edges: vec![],
            cells: Vec::with_capacity(ncells),
            edge_indices: HashMap::new(),
        }
    }

    /// The number of vertices added so far
    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    /// The number of distinct edges created so far
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// The number of cells added so far
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Has the mesh been built?
    pub fn is_built(&self) -> bool {
        self.state == State::Built
    }

    fn assert_staging(&self, action: &str) {
        if self.state == State::Built {
            panic!("Cannot {action}: this factory has already built its mesh");
        }
    }

    fn validate(
        &self,
        ref_el: RefEl,
        nodes: &[usize],
        geometry_ref_el: Option<RefEl>,
    ) -> Result<()> {
        if ref_el == RefEl::Point {
            return Err(Error::UnsupportedRefEl(ref_el));
        }
        if nodes.len() != ref_el.num_nodes() {
            return Err(Error::WrongVertexCount {
                ref_el,
                expected: ref_el.num_nodes(),
                actual: nodes.len(),
            });
        }
        if let Some(index) = nodes.iter().find(|n| **n >= self.points.len()) {
            return Err(Error::VertexIndexOutOfRange {
                index: *index,
                count: self.points.len(),
            });
        }
        if let Some(index) = nodes.iter().duplicates().next() {
            return Err(Error::RepeatedVertex(*index));
        }
        match geometry_ref_el {
            Some(actual) if actual != ref_el => Err(Error::GeometryMismatch {
                expected: ref_el,
                actual,
            }),
            _ => Ok(()),
        }
    }

    /// Find or create the edge joining two vertices
    ///
    /// A geometry passed in replaces any geometry the edge already has, and the edge then
    /// takes its direction from `vertices`.
    fn register_edge(
        &mut self,
        vertices: [usize; 2],
        geometry: Option<Box<dyn Geometry<T>>>,
    ) -> usize {
        let key = (vertices[0].min(vertices[1]), vertices[0].max(vertices[1]));
        if let Some(index) = self.edge_indices.get(&key) {
            if let Some(geometry) = geometry {
                self.edges[*index] = StagedEdge { vertices, geometry };
            }
            *index
        } else {
            let index = self.edges.len();
            let geometry: Box<dyn Geometry<T>> = match geometry {
                Some(g) => g,
                None => Box::new(SegmentGeometry::new([
                    self.points[vertices[0]],
                    self.points[vertices[1]],
                ])),
            };
            self.edges.push(StagedEdge { vertices, geometry });
            self.edge_indices.insert(key, index);
            index
        }
    }
}

impl<T: RealScalar> Default for MeshFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RealScalar> Builder for MeshFactory<T> {
    type T = T;
    type Mesh = Mesh<T>;

    fn add_point(&mut self, coords: [T; DIM_WORLD]) -> usize {
        self.assert_staging("add a point");
        self.points.push(coords);
        self.points.len() - 1
    }

    fn add_entity(
        &mut self,
        ref_el: RefEl,
        nodes: &[usize],
        geometry: Option<Box<dyn Geometry<T>>>,
    ) -> Result<usize> {
        self.assert_staging("add an entity");
        self.validate(ref_el, nodes, geometry.as_ref().map(|g| g.ref_el()))?;

        if ref_el == RefEl::Segment {
            return Ok(self.register_edge([nodes[0], nodes[1]], geometry));
        }

        let edges = (0..ref_el.num_sub_entities(1))
            .map(|i| {
                let local = ref_el.sub_entity_nodes(1, i);
                self.register_edge([nodes[local[0]], nodes[local[1]]], None)
            })
            .collect::<Vec<_>>();
        let geometry = geometry.unwrap_or_else(|| {
            let corners = nodes.iter().map(|n| self.points[*n]).collect::<Vec<_>>();
            create_geometry(ref_el, &corners)
        });
        self.cells.push(StagedCell {
            vertices: nodes.to_vec(),
            edges,
            geometry,
        });
        Ok(self.cells.len() - 1)
    }

    fn build(&mut self) -> Mesh<T> {
        self.assert_staging("build the mesh");
        self.state = State::Built;

        let points = std::mem::take(&mut self.points);
        let edges = std::mem::take(&mut self.edges);
        let cells = std::mem::take(&mut self.cells);
        self.edge_indices.clear();

        let mut used = vec![false; points.len()];
        for e in &edges {
            for v in e.vertices {
                used[v] = true;
            }
        }
        let unused = used.iter().filter(|u| !**u).count();
        if unused > 0 {
            warn!(
                "{unused} of {} vertices are not part of any cell or edge",
                points.len()
            );
        }
        debug!(
            "Building hybrid 2D mesh with {} cells, {} edges and {} vertices",
            cells.len(),
            edges.len(),
            points.len()
        );

        let vertices = points
            .into_iter()
            .map(|coords| EntityData {
                geometry: Box::new(PointGeometry::new(coords)),
                sub_entities: SubEntityIndices::Vertex,
            })
            .collect();
        let edges = edges
            .into_iter()
            .map(|e| EntityData {
                geometry: e.geometry,
                sub_entities: SubEntityIndices::Edge {
                    vertices: e.vertices,
                },
            })
            .collect();
        let cells = cells
            .into_iter()
            .map(|c| EntityData {
                geometry: c.geometry,
                sub_entities: SubEntityIndices::Cell {
                    edges: c.edges,
                    vertices: c.vertices,
                },
            })
            .collect();

        Mesh::new(cells, edges, vertices)
    }
}

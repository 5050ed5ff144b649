//! Reference elements

use crate::types::RealScalar;

/// The shape of an entity
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum RefEl {
    /// A point
    Point = 0,
    /// A line segment
    Segment = 1,
    /// A triangle
    Triangle = 2,
    /// A quadrilateral
    Quadrilateral = 3,
}

impl RefEl {
    /// Create a reference element from a u8
    pub fn from(i: u8) -> Option<RefEl> {
        match i {
            0 => Some(RefEl::Point),
            1 => Some(RefEl::Segment),
            2 => Some(RefEl::Triangle),
            3 => Some(RefEl::Quadrilateral),
            _ => None,
        }
    }

    /// The topological dimension
    pub fn dimension(self) -> usize {
        match self {
            RefEl::Point => 0,
            RefEl::Segment => 1,
            RefEl::Triangle => 2,
            RefEl::Quadrilateral => 2,
        }
    }

    /// The number of nodes (corners)
    pub fn num_nodes(self) -> usize {
        match self {
            RefEl::Point => 1,
            RefEl::Segment => 2,
            RefEl::Triangle => 3,
            RefEl::Quadrilateral => 4,
        }
    }

    /// Is the reference element a simplex?
    pub fn is_simplex(self) -> bool {
        !matches!(self, RefEl::Quadrilateral)
    }

    /// The number of sub-entities of relative codimension `rel_codim`
    pub fn num_sub_entities(self, rel_codim: usize) -> usize {
        match (self, rel_codim) {
            (_, 0) => 1,
            (RefEl::Segment, 1) => 2,
            (RefEl::Triangle, 1 | 2) => 3,
            (RefEl::Quadrilateral, 1 | 2) => 4,
            _ => 0,
        }
    }

    /// The reference element of sub-entity `i` of relative codimension `rel_codim`
    pub fn sub_type(self, rel_codim: usize, i: usize) -> RefEl {
        if i >= self.num_sub_entities(rel_codim) {
            panic!("{self} has no sub-entity {i} of relative codimension {rel_codim}");
        }
        match self.dimension() - rel_codim {
            0 => RefEl::Point,
            1 => RefEl::Segment,
            _ => self,
        }
    }

    /// The local node numbers of sub-entity `i` of relative codimension `rel_codim`
    ///
    /// Nodes are numbered counter-clockwise; edge `i` of a cell runs from node `i` to node
    /// `i + 1` (modulo the number of nodes).
    pub fn sub_entity_nodes(self, rel_codim: usize, i: usize) -> &'static [usize] {
        const NODES: [usize; 4] = [0, 1, 2, 3];
        const TRIANGLE_EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];
        const QUADRILATERAL_EDGES: [[usize; 2]; 4] = [[0, 1], [1, 2], [2, 3], [3, 0]];

        if i >= self.num_sub_entities(rel_codim) {
            panic!("{self} has no sub-entity {i} of relative codimension {rel_codim}");
        }
        match (self, self.dimension() - rel_codim) {
            (_, 0) => &NODES[i..i + 1],
            (RefEl::Segment, 1) => &NODES[0..2],
            (RefEl::Triangle, 1) => &TRIANGLE_EDGES[i],
            (RefEl::Quadrilateral, 1) => &QUADRILATERAL_EDGES[i],
            _ => &NODES[0..self.num_nodes()],
        }
    }

    /// The coordinates of the nodes of the reference element
    pub fn node_coords<T: RealScalar>(self) -> Vec<Vec<T>> {
        let zero = T::zero();
        let one = T::one();
        match self {
            RefEl::Point => vec![vec![]],
            RefEl::Segment => vec![vec![zero], vec![one]],
            RefEl::Triangle => vec![vec![zero, zero], vec![one, zero], vec![zero, one]],
            RefEl::Quadrilateral => vec![
                vec![zero, zero],
                vec![one, zero],
                vec![one, one],
                vec![zero, one],
            ],
        }
    }

    /// The midpoint of the reference element
    pub fn midpoint<T: RealScalar>(self) -> Vec<T> {
        let half = T::from(0.5).unwrap();
        let third = T::one() / T::from(3.0).unwrap();
        match self {
            RefEl::Point => vec![],
            RefEl::Segment => vec![half],
            RefEl::Triangle => vec![third; 2],
            RefEl::Quadrilateral => vec![half; 2],
        }
    }
}

impl std::fmt::Display for RefEl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RefEl::Point => "POINT",
            RefEl::Segment => "SEGMENT",
            RefEl::Triangle => "TRIA",
            RefEl::Quadrilateral => "QUAD",
        };
        write!(f, "{name}")
    }
}

//! Types used throughout the crate

use crate::reference_element::RefEl;
use std::fmt::Debug;

/// Scalar type used for coordinates
pub trait RealScalar: num::Float + Debug + Send + Sync + 'static {}

impl<T: num::Float + Debug + Send + Sync + 'static> RealScalar for T {}

/// Dimension of the space that meshes are embedded in
pub const DIM_WORLD: usize = 2;

/// Error type
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The reference element cannot be added to a mesh directly
    #[error("Entities of type {0} cannot be added to a 2D hybrid mesh")]
    UnsupportedRefEl(RefEl),
    /// Wrong number of vertex indices for a reference element
    #[error("{ref_el} needs {expected} vertex indices, but {actual} were given")]
    WrongVertexCount {
        /// The reference element of the entity
        ref_el: RefEl,
        /// The number of vertices of the reference element
        expected: usize,
        /// The number of vertex indices passed in
        actual: usize,
    },
    /// A vertex index that has not been registered
    #[error("Vertex index {index} is out of range: only {count} vertices have been added")]
    VertexIndexOutOfRange {
        /// The offending index
        index: usize,
        /// The number of vertices registered so far
        count: usize,
    },
    /// A vertex index that appears twice in one entity
    #[error("Vertex index {0} appears more than once in the same entity")]
    RepeatedVertex(usize),
    /// A geometry whose shape does not match the entity
    #[error("A geometry of type {actual} was given for an entity of type {expected}")]
    GeometryMismatch {
        /// The reference element of the entity
        expected: RefEl,
        /// The reference element of the geometry
        actual: RefEl,
    },
    /// A required builder option was not set
    #[error("Required option `{0}` has not been set")]
    MissingOption(&'static str),
    /// A grid with no cells along one axis
    #[error("The number of cells along the {0} axis must be positive")]
    NonPositiveCellCount(&'static str),
    /// A rectangle with no area
    #[error("The top right corner must lie strictly above and to the right of the bottom left corner")]
    DegenerateDomain,
    /// A stored sub-entity index that does not resolve
    #[error("Codim {codim} entity {index} refers to codim {sub_codim} entity {sub_index}, but only {size} exist")]
    SubEntityOutOfRange {
        /// Codimension of the referring entity
        codim: usize,
        /// Index of the referring entity
        index: usize,
        /// Codimension of the sub-entity
        sub_codim: usize,
        /// The unresolved index
        sub_index: usize,
        /// Number of entities of codimension `sub_codim`
        size: usize,
    },
    /// An edge of a cell whose end points are not vertices of the cell
    #[error("Edge {edge} of cell {cell} has an end point that is not a vertex of the cell")]
    EdgeNotInCell {
        /// The cell index
        cell: usize,
        /// The edge index
        edge: usize,
    },
    /// Two edges joining the same pair of vertices
    #[error("Edges {first} and {second} connect the same pair of vertices")]
    DuplicateEdge {
        /// The edge with the smaller index
        first: usize,
        /// The edge with the larger index
        second: usize,
    },
    /// An edge or vertex that no cell contains
    #[error("Codim {codim} entity {index} is not a sub-entity of any cell")]
    OrphanEntity {
        /// Codimension of the entity
        codim: usize,
        /// Index of the entity
        index: usize,
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Orientation of an edge relative to a cell
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Orientation {
    /// The edge runs in the same direction as the cell's local edge
    Positive,
    /// The edge runs against the cell's local edge
    Negative,
}

impl Orientation {
    /// +1 or -1
    pub fn to_sign(self) -> i32 {
        match self {
            Orientation::Positive => 1,
            Orientation::Negative => -1,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Positive => write!(f, "+"),
            Orientation::Negative => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::Positive.to_sign(), 1);
        assert_eq!(Orientation::Negative.to_sign(), -1);
        assert_eq!(format!("{}{}", Orientation::Positive, Orientation::Negative), "+-");
    }

    #[test]
    fn test_error_messages() {
        //! Invalid-argument errors name the parameter at fault
        let e = Error::WrongVertexCount {
            ref_el: RefEl::Quadrilateral,
            expected: 4,
            actual: 3,
        };
        assert_eq!(e.to_string(), "QUAD needs 4 vertex indices, but 3 were given");
        let e = Error::MissingOption("top_right_corner");
        assert_eq!(
            e.to_string(),
            "Required option `top_right_corner` has not been set"
        );
    }
}

//! Topology engine for hybrid 2D meshes
//!
//! A mesh is built incrementally through a [`MeshFactory`](mesh::hybrid2d::MeshFactory) from
//! vertex coordinates and cell connectivity. Edges are synthesised and deduplicated during
//! construction, so cells that touch share one edge entity. The finished
//! [`Mesh`](mesh::hybrid2d::Mesh) is immutable and can be read from many threads at once.
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod geometry;
pub mod mesh;
pub mod reference_element;
pub mod traits;
pub mod types;

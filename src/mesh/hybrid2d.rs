//! Index-based hybrid 2D mesh
//!
//! The [`Mesh`] is an arena that owns every entity. [`Entity`] values are lightweight handles
//! holding a reference to the mesh together with a codimension and an index.

mod entity;
mod factory;
mod mesh;

pub use entity::{Entity, EntityIter, SubEntities};
pub(crate) use entity::{EntityData, SubEntityIndices};
pub use factory::MeshFactory;
pub use mesh::Mesh;

//! Trait definitions

mod builder;
mod geometry;

pub use builder::Builder;
pub use geometry::Geometry;

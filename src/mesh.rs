//! Mesh creation and storage

pub mod hybrid2d;
pub mod structured;
pub mod utils;

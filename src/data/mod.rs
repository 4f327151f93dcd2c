//! Per-vertex value containers, sparse matrices, and full-surface scatter.

pub mod field;
pub mod scatter;
pub mod sparse;

pub use field::{DistanceField, FullSurfaceVector, ZoneMap};
pub use scatter::{scatter_field, scatter_matrix, scatter_values};
pub use sparse::SparseDistanceMatrix;

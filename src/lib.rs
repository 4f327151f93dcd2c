//! # cortex-geodesics
//!
//! Geodesic (surface-following) distance computation on triangulated
//! cortical surface meshes, and the index-space bookkeeping around it:
//! restricting a full surface to its cortex subset, translating vertex
//! indices between full-surface and cortex-local numbering, projecting
//! results back, and aggregating single-source solves into nearest-seed
//! zone partitions and inter-region distance matrices.
//!
//! ## Features
//! - Typed full-surface / cortex-local vertex indices that cannot be mixed
//! - Cortex restriction with a fixed bidirectional index map built once
//! - Dense distance fields and sparse bounded pairwise matrices, with
//!   exact sparsity-preserving projection to full-surface space
//! - Nearest-seed zone partitioning with deterministic lowest-index
//!   tie-breaking
//! - Symmetric region-to-region minimum-distance matrices from label sets
//! - Pluggable solver trait with a built-in edge-graph Dijkstra solver;
//!   per-seed and per-region solves fan out on a Rayon pool
//!
//! ## Determinism
//!
//! Every operation is a pure function of its inputs. Parallel fan-outs
//! collect results by seed/region position, so output never depends on
//! completion order.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! cortex-geodesics = "0.1"
//! ```
//!
//! Distances from one seed vertex to the whole cortex:
//! ```
//! use cortex_geodesics::prelude::*;
//!
//! # fn main() -> Result<(), cortex_geodesics::error::CortexGeodesicsError> {
//! let surface = Surface::new(
//!     vec![
//!         [0.0, 0.0, 0.0],
//!         [1.0, 0.0, 0.0],
//!         [0.0, 1.0, 0.0],
//!         [1.0, 1.0, 0.0],
//!     ],
//!     vec![
//!         [VertexId::new(0), VertexId::new(1), VertexId::new(3)],
//!         [VertexId::new(0), VertexId::new(3), VertexId::new(2)],
//!     ],
//! )?;
//! let mask = CortexMask::new(
//!     vec![VertexId::new(0), VertexId::new(1), VertexId::new(3)],
//!     surface.vertex_count(),
//! )?;
//! let field = distance_from_sources(&EdgeDijkstra, &surface, &mask, &[VertexId::new(0)])?;
//! assert_eq!(field.get(VertexId::new(2)), 0.0); // off-cortex sentinel
//! # Ok(())
//! # }
//! ```

pub mod algs;
pub mod cortex;
pub mod data;
pub mod error;
pub mod solver;
pub mod surface;

/// A convenient prelude importing the most-used types and operations.
pub mod prelude {
    pub use crate::algs::distance::{
        distance_field, distance_from_sources, pairwise_distance_matrix, pairwise_within,
    };
    pub use crate::algs::regions::{
        DEFAULT_EXCLUSIONS, LabelCollection, LabelSet, RegionDistanceMatrix,
        region_distance_matrix,
    };
    pub use crate::algs::zones::nearest_seed_zones;
    pub use crate::cortex::{CortexMask, CortexSubsurface};
    pub use crate::data::{
        DistanceField, FullSurfaceVector, SparseDistanceMatrix, ZoneMap, scatter_field,
        scatter_matrix, scatter_values,
    };
    pub use crate::error::CortexGeodesicsError;
    pub use crate::solver::{EdgeDijkstra, GeodesicSolver, MeshView, SolverFailure};
    pub use crate::surface::{CortexId, Point3, Surface, Triangle, VertexId};
}

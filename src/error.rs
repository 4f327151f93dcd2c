//! CortexGeodesicsError: unified error type for cortex-geodesics public APIs
//!
//! Every fallible operation in the crate reports through this enum; no public
//! API panics on malformed input. Failures inside a per-seed or per-region
//! fan-out are wrapped with the branch that raised them so the caller can
//! tell which input was responsible.

use thiserror::Error;

use crate::solver::SolverFailure;
use crate::surface::VertexId;

/// Unified error type for cortex-geodesics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CortexGeodesicsError {
    /// The cortex mask contains no vertices.
    #[error("cortex mask is empty")]
    EmptyMask,
    /// The mask is not strictly increasing at `position` (covers both
    /// unsorted and duplicate indices).
    #[error("cortex mask is not strictly increasing at position {position}")]
    MaskNotIncreasing { position: usize },
    /// A mask index does not exist on the surface the mask was built for.
    #[error("cortex mask index {index} out of range for surface with {vertex_count} vertices")]
    MaskIndexOutOfRange { index: VertexId, vertex_count: usize },
    /// The mask records a different full-surface vertex count than the
    /// surface it is being used with.
    #[error("cortex mask was built for {mask_surface} vertices but the surface has {surface}")]
    SurfaceLengthMismatch { mask_surface: usize, surface: usize },
    /// A source vertex lies outside the cortex mask.
    #[error("source vertex {0} is not in the cortex mask")]
    OutOfCortex(VertexId),
    /// A cortex-space vector has the wrong length for the mask.
    #[error("cortex-space vector has {actual} entries but the mask has {expected}")]
    FieldLength { expected: usize, actual: usize },
    /// A cortex-space sparse matrix has the wrong dimension for the mask.
    #[error("cortex-space matrix has dimension {actual} but the mask has {expected} vertices")]
    MatrixDim { expected: usize, actual: usize },
    /// A sparse-matrix entry references a row or column outside the matrix.
    #[error("sparse entry ({row}, {col}) out of range for dimension {dim}")]
    EntryOutOfRange { row: u32, col: u32, dim: usize },
    /// A triangle references a vertex the surface does not have.
    #[error("triangle {triangle} references vertex {index} but the surface has {vertex_count} vertices")]
    TriangleOutOfRange {
        triangle: usize,
        index: VertexId,
        vertex_count: usize,
    },
    /// The surface has more vertices than the 32-bit index space can address.
    #[error("surface has {0} vertices, which exceeds the 32-bit index space")]
    SurfaceTooLarge(usize),
    /// A single-source query was issued with no source vertices.
    #[error("source set is empty")]
    EmptySourceSet,
    /// A zone partition was requested with no seed sets at all.
    #[error("no seed sets were provided")]
    EmptySeedList,
    /// The bounded pairwise search radius must be strictly positive.
    #[error("pairwise search radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    /// A label has no member vertices (or is absent from the collection).
    #[error("label `{0}` has no member vertices")]
    EmptyRegion(String),
    /// Exclusion filtering removed every label.
    #[error("no regions remain after exclusion filtering")]
    NoRegions,
    /// The external geodesic solver failed; never retried.
    #[error("geodesic solver failed: {0}")]
    Solver(#[from] SolverFailure),
    /// A failure inside the per-seed fan-out, tagged with the 1-based seed
    /// index that raised it.
    #[error("solve for seed {seed} failed: {source}")]
    SeedSolve {
        seed: usize,
        #[source]
        source: Box<CortexGeodesicsError>,
    },
    /// A failure inside the per-region fan-out, tagged with the region name.
    #[error("solve for region `{region}` failed: {source}")]
    RegionSolve {
        region: String,
        #[source]
        source: Box<CortexGeodesicsError>,
    },
}

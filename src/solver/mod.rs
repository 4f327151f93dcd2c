//! Geodesic solver contract.
//!
//! The distance primitive is an external capability: anything that can
//! answer single-source and bounded all-pairs shortest-path queries on a
//! triangulated 2-manifold can sit behind [`GeodesicSolver`]. The crate
//! ships [`EdgeDijkstra`](dijkstra::EdgeDijkstra) as the default
//! implementation; an exact window-propagation or heat-method solver can
//! be swapped in through the trait without touching the aggregation layer.
//!
//! Solvers receive cortex-local geometry as raw buffers via [`MeshView`]
//! and must handle possibly-disconnected meshes: a vertex unreachable from
//! every source reports `f64::INFINITY`, never an arbitrary value.

pub mod dijkstra;

pub use dijkstra::EdgeDijkstra;

use thiserror::Error;

/// Borrowed raw-buffer view of a triangle mesh at the solver boundary.
#[derive(Debug, Clone, Copy)]
pub struct MeshView<'a> {
    /// Vertex coordinates.
    pub vertices: &'a [[f64; 3]],
    /// Triangles as raw 0-based vertex indices.
    pub triangles: &'a [[u32; 3]],
}

impl MeshView<'_> {
    /// Number of vertices in the view.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Failure reported by a geodesic solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverFailure {
    /// A source index does not exist on the mesh handed to the solver.
    #[error("source index {index} out of range for mesh with {vertex_count} vertices")]
    SourceOutOfRange { index: u32, vertex_count: usize },
    /// The mesh geometry cannot support a distance computation
    /// (non-finite coordinates, zero-length edges, ...).
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
    /// The solver returned a field of the wrong length.
    #[error("solver returned {actual} distances for a mesh with {expected} vertices")]
    BadFieldLength { expected: usize, actual: usize },
    /// Any other solver-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Single-source and bounded all-pairs geodesic distance on a triangle
/// mesh.
///
/// Implementations must be deterministic: the same mesh and sources yield
/// the same output, so a failed call is never retried.
pub trait GeodesicSolver: Sync {
    /// Per-vertex minimum geodesic distance to any vertex of `sources`.
    ///
    /// The result has exactly one entry per mesh vertex. Vertices in a
    /// component unreachable from every source hold `f64::INFINITY`.
    fn distance_field(
        &self,
        mesh: MeshView<'_>,
        sources: &[u32],
    ) -> Result<Vec<f64>, SolverFailure>;

    /// All vertex pairs within `max_distance` of each other, as symmetric
    /// `(i, j, distance)` triplets with `0 < distance <= max_distance` and
    /// no diagonal entries.
    ///
    /// `max_distance` is assumed positive; the distance engine validates
    /// it before delegating.
    fn bounded_matrix(
        &self,
        mesh: MeshView<'_>,
        max_distance: f64,
    ) -> Result<Vec<(u32, u32, f64)>, SolverFailure>;
}

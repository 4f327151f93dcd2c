//! Distance engine: geodesic queries over the cortex sub-mesh.
//!
//! The low-level operations ([`distance_field`], [`pairwise_within`]) work
//! in cortex-local indices against a [`GeodesicSolver`]. The high-level
//! entry points ([`distance_from_sources`], [`pairwise_distance_matrix`])
//! run the whole pipeline: restrict the surface to the cortex, translate
//! the sources, solve, and scatter the result back to full-surface space.

use crate::cortex::{CortexMask, CortexSubsurface};
use crate::data::{
    DistanceField, FullSurfaceVector, SparseDistanceMatrix, scatter_field, scatter_matrix,
};
use crate::error::CortexGeodesicsError;
use crate::solver::{GeodesicSolver, SolverFailure};
use crate::surface::{CortexId, Surface, VertexId};

/// Distance from a nonempty cortex-local source set to every cortex vertex.
///
/// The returned field is the solver's raw output: per vertex, the minimum
/// distance to any source. No other multi-source aggregation is offered.
///
/// # Errors
/// [`CortexGeodesicsError::EmptySourceSet`] for an empty source set;
/// [`CortexGeodesicsError::Solver`] for any solver failure, propagated
/// verbatim and never retried.
pub fn distance_field<S: GeodesicSolver + ?Sized>(
    solver: &S,
    subsurface: &CortexSubsurface,
    sources: &[CortexId],
) -> Result<DistanceField, CortexGeodesicsError> {
    if sources.is_empty() {
        return Err(CortexGeodesicsError::EmptySourceSet);
    }
    let raw_sources: &[u32] = bytemuck::cast_slice(sources);
    let values = solver.distance_field(subsurface.as_mesh_view(), raw_sources)?;
    if values.len() != subsurface.vertex_count() {
        return Err(SolverFailure::BadFieldLength {
            expected: subsurface.vertex_count(),
            actual: values.len(),
        }
        .into());
    }
    Ok(DistanceField::new(values))
}

/// Sparse matrix of all cortex vertex pairs within `max_distance`.
///
/// Entries beyond the radius are absent. Cost grows steeply with the
/// radius; keeping it small is the caller's responsibility.
///
/// # Errors
/// [`CortexGeodesicsError::NonPositiveRadius`] unless `max_distance > 0`
/// (NaN is rejected the same way); solver failures propagate verbatim.
pub fn pairwise_within<S: GeodesicSolver + ?Sized>(
    solver: &S,
    subsurface: &CortexSubsurface,
    max_distance: f64,
) -> Result<SparseDistanceMatrix, CortexGeodesicsError> {
    if !(max_distance > 0.0) {
        return Err(CortexGeodesicsError::NonPositiveRadius(max_distance));
    }
    let triplets = solver.bounded_matrix(subsurface.as_mesh_view(), max_distance)?;
    SparseDistanceMatrix::from_triplets(subsurface.vertex_count(), triplets)
}

/// Geodesic distance from a set of full-surface source vertices to every
/// vertex, projected back to full-surface space (non-cortex vertices read
/// `0`).
pub fn distance_from_sources<S: GeodesicSolver + ?Sized>(
    solver: &S,
    surface: &Surface,
    mask: &CortexMask,
    sources: &[VertexId],
) -> Result<FullSurfaceVector<f64>, CortexGeodesicsError> {
    let subsurface = CortexSubsurface::extract(surface, mask)?;
    let local_sources = mask.to_local(sources)?;
    let field = distance_field(solver, &subsurface, &local_sources)?;
    scatter_field(&field, mask)
}

/// Bounded pairwise geodesic distances, re-embedded into an `n × n` sparse
/// matrix over full-surface indices.
pub fn pairwise_distance_matrix<S: GeodesicSolver + ?Sized>(
    solver: &S,
    surface: &Surface,
    mask: &CortexMask,
    max_distance: f64,
) -> Result<SparseDistanceMatrix, CortexGeodesicsError> {
    let subsurface = CortexSubsurface::extract(surface, mask)?;
    let local = pairwise_within(solver, &subsurface, max_distance)?;
    scatter_matrix(&local, mask)
}

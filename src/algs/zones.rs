//! Nearest-seed zone partitioning of the cortex.
//!
//! Given an ordered list of seed sets, each cortex vertex is assigned the
//! 1-based index of the seed set it is geodesically closest to; ties go to
//! the lowest seed index. One independent solve per seed set, run as a
//! parallel map with results collected by seed position, so the output is
//! deterministic regardless of completion order.

use rayon::prelude::*;

use crate::algs::distance;
use crate::cortex::{CortexMask, CortexSubsurface};
use crate::data::{DistanceField, ZoneMap, scatter_values};
use crate::error::CortexGeodesicsError;
use crate::solver::GeodesicSolver;
use crate::surface::{Surface, VertexId};

/// Partitions the cortex into nearest-seed zones.
///
/// The result is a full-surface vector of 1-based seed indices; vertices
/// off the cortex read `0` ("not assigned"), as does a cortex vertex
/// unreachable from every seed.
///
/// # Errors
/// [`CortexGeodesicsError::EmptySeedList`] if `seed_sets` is empty. A
/// failure in one seed's solve (empty seed set, out-of-cortex seed vertex,
/// solver failure) aborts the whole call wrapped in
/// [`CortexGeodesicsError::SeedSolve`] with the 1-based seed index;
/// sibling solves are cancelled rather than assembled into a partial
/// result.
pub fn nearest_seed_zones<S: GeodesicSolver + ?Sized>(
    solver: &S,
    surface: &Surface,
    mask: &CortexMask,
    seed_sets: &[Vec<VertexId>],
) -> Result<ZoneMap, CortexGeodesicsError> {
    if seed_sets.is_empty() {
        return Err(CortexGeodesicsError::EmptySeedList);
    }
    let subsurface = CortexSubsurface::extract(surface, mask)?;
    log::debug!(
        "zone partition: {} seed sets over {} cortex vertices",
        seed_sets.len(),
        subsurface.vertex_count(),
    );

    let fields: Vec<DistanceField> = seed_sets
        .par_iter()
        .enumerate()
        .map(|(k, seeds)| {
            mask.to_local(seeds)
                .and_then(|local| distance::distance_field(solver, &subsurface, &local))
                .map_err(|e| CortexGeodesicsError::SeedSolve {
                    seed: k + 1,
                    source: Box::new(e),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Argmin in seed order with strict `<`: the lowest seed index wins ties.
    let mut assignment = vec![0u32; subsurface.vertex_count()];
    for (v, slot) in assignment.iter_mut().enumerate() {
        let mut best = f64::INFINITY;
        for (k, field) in fields.iter().enumerate() {
            let d = field.values()[v];
            if d < best {
                best = d;
                *slot = (k + 1) as u32;
            }
        }
    }

    scatter_values(&assignment, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EdgeDijkstra;

    fn vid(raw: u32) -> VertexId {
        VertexId::new(raw)
    }

    /// Isosceles triangle: vertex 2 is equidistant from 0 and 1.
    fn isosceles() -> Surface {
        Surface::new(
            vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
            vec![[vid(0), vid(1), vid(2)]],
        )
        .unwrap()
    }

    #[test]
    fn tie_goes_to_lowest_seed() {
        let surface = isosceles();
        let mask = CortexMask::new((0..3).map(vid).collect(), 3).unwrap();
        let zones = nearest_seed_zones(
            &EdgeDijkstra,
            &surface,
            &mask,
            &[vec![vid(0)], vec![vid(1)]],
        )
        .unwrap();
        assert_eq!(zones.get(vid(0)), 1);
        assert_eq!(zones.get(vid(1)), 2);
        assert_eq!(zones.get(vid(2)), 1); // equidistant, lowest index wins
    }

    #[test]
    fn empty_seed_list_rejected() {
        let surface = isosceles();
        let mask = CortexMask::new((0..3).map(vid).collect(), 3).unwrap();
        assert!(matches!(
            nearest_seed_zones(&EdgeDijkstra, &surface, &mask, &[]),
            Err(CortexGeodesicsError::EmptySeedList)
        ));
    }

    #[test]
    fn failing_seed_is_tagged() {
        let surface = isosceles();
        let mask = CortexMask::new(vec![vid(0), vid(2)], 3).unwrap();
        // Seed 2 names vertex 1, which is off the cortex.
        let err = nearest_seed_zones(
            &EdgeDijkstra,
            &surface,
            &mask,
            &[vec![vid(0)], vec![vid(1)]],
        )
        .unwrap_err();
        match err {
            CortexGeodesicsError::SeedSolve { seed, source } => {
                assert_eq!(seed, 2);
                assert!(matches!(
                    *source,
                    CortexGeodesicsError::OutOfCortex(v) if v == vid(1)
                ));
            }
            other => panic!("expected SeedSolve, got {other:?}"),
        }
    }
}

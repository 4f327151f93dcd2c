//! Region-to-region minimum geodesic distance matrices from label sets.
//!
//! A label collection names anatomical regions (sets of full-surface
//! vertices). After dropping excluded names, one geodesic solve per
//! retained region gives its distance row over the cortex; the matrix
//! entry for a region pair is the minimum of one region's row over the
//! other region's member vertices. Entries are computed for the upper
//! triangle and mirrored, so the symmetry `dist(a,b) == dist(b,a)` holds
//! bit-exactly, and the diagonal is exactly `0`.

use hashbrown::HashMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algs::distance;
use crate::cortex::{CortexMask, CortexSubsurface};
use crate::data::DistanceField;
use crate::error::CortexGeodesicsError;
use crate::solver::GeodesicSolver;
use crate::surface::{CortexId, Surface, VertexId};

/// Labels excluded from region matrices unless the caller overrides:
/// the unlabeled bucket and the medial wall.
pub const DEFAULT_EXCLUSIONS: [&str; 2] = ["Unknown", "Medial_wall"];

/// A named collection of vertex regions, as produced by a label reader.
///
/// `label_names` drives the row/column order of the region matrix
/// (presentation order of the collection); `label_vertices` returns the
/// member vertices of one label, or `None` for an unknown name.
pub trait LabelCollection {
    /// Label names in presentation order.
    fn label_names(&self) -> &[String];
    /// Member vertices of `name`, if present.
    fn label_vertices(&self, name: &str) -> Option<&[VertexId]>;
}

/// In-memory label collection.
///
/// Names keep their order of first insertion, which fixes the region
/// matrix ordering deterministically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelSet {
    names: Vec<String>,
    members: HashMap<String, Vec<VertexId>>,
}

impl LabelSet {
    /// Creates an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the member vertices for `name`, keeping first-insertion order.
    ///
    /// Returns the previous members if the label already existed.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        vertices: Vec<VertexId>,
    ) -> Option<Vec<VertexId>> {
        let name = name.into();
        if !self.members.contains_key(&name) {
            self.names.push(name.clone());
        }
        self.members.insert(name, vertices)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl LabelCollection for LabelSet {
    fn label_names(&self) -> &[String] {
        &self.names
    }

    fn label_vertices(&self, name: &str) -> Option<&[VertexId]> {
        self.members.get(name).map(Vec::as_slice)
    }
}

/// Symmetric dense `k × k` matrix of minimum inter-region geodesic
/// distances, row-major, zero diagonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDistanceMatrix {
    dim: usize,
    values: Vec<f64>,
}

impl RegionDistanceMatrix {
    /// Number of regions.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry `(a, b)`: minimum geodesic distance between any vertex of
    /// region `a` and any vertex of region `b`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f64 {
        self.values[a * self.dim + b]
    }

    /// Row-major storage.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Computes the inter-region minimum-distance matrix over a label
/// collection, with `exclusions` removed first.
///
/// Returns the matrix together with the retained region names in matrix
/// order (order of first appearance in the collection).
///
/// # Errors
/// - [`CortexGeodesicsError::NoRegions`] if exclusion filtering removes
///   every label.
/// - [`CortexGeodesicsError::EmptyRegion`] for a retained label with no
///   member vertices.
/// - [`CortexGeodesicsError::RegionSolve`] wrapping an out-of-cortex
///   member or a solver failure, tagged with the region name; sibling
///   solves are cancelled and no partial matrix is returned.
pub fn region_distance_matrix<S, L>(
    solver: &S,
    surface: &Surface,
    mask: &CortexMask,
    labels: &L,
    exclusions: &[&str],
) -> Result<(RegionDistanceMatrix, Vec<String>), CortexGeodesicsError>
where
    S: GeodesicSolver + ?Sized,
    L: LabelCollection + ?Sized,
{
    let names: Vec<String> = labels
        .label_names()
        .iter()
        .filter(|name| !exclusions.contains(&name.as_str()))
        .cloned()
        .collect();
    if names.is_empty() {
        return Err(CortexGeodesicsError::NoRegions);
    }
    log::debug!("region distance matrix over {} regions", names.len());

    let subsurface = CortexSubsurface::extract(surface, mask)?;

    // Translate every region's members up front; emptiness and
    // out-of-cortex members are caller errors, reported per region.
    let local_members: Vec<Vec<CortexId>> = names
        .iter()
        .map(|name| {
            let members = labels
                .label_vertices(name)
                .filter(|m| !m.is_empty())
                .ok_or_else(|| CortexGeodesicsError::EmptyRegion(name.clone()))?;
            mask.to_local(members)
                .map_err(|e| CortexGeodesicsError::RegionSolve {
                    region: name.clone(),
                    source: Box::new(e),
                })
        })
        .collect::<Result<_, _>>()?;

    // One solve per region, fanned out in parallel, collected by position.
    let rows: Vec<DistanceField> = local_members
        .par_iter()
        .enumerate()
        .map(|(r, sources)| {
            distance::distance_field(solver, &subsurface, sources)
                .map_err(|e| CortexGeodesicsError::RegionSolve {
                    region: names[r].clone(),
                    source: Box::new(e),
                })
                .inspect(|_| log::trace!("region `{}` solved", names[r]))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let k = names.len();
    let mut values = vec![0.0; k * k];
    for a in 0..k {
        for b in (a + 1)..k {
            let d = local_members[b]
                .iter()
                .map(|&v| rows[a].get(v))
                .fold(f64::INFINITY, f64::min);
            values[a * k + b] = d;
            values[b * k + a] = d;
        }
    }

    Ok((RegionDistanceMatrix { dim: k, values }, names))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EdgeDijkstra;

    fn vid(raw: u32) -> VertexId {
        VertexId::new(raw)
    }

    /// Two unit triangles joined along the 1-2 edge.
    fn strip() -> Surface {
        Surface::new(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
            ],
            vec![[vid(0), vid(1), vid(2)], [vid(1), vid(3), vid(2)]],
        )
        .unwrap()
    }

    fn full_mask() -> CortexMask {
        CortexMask::new((0..4).map(vid).collect(), 4).unwrap()
    }

    #[test]
    fn label_set_keeps_first_insertion_order() {
        let mut labels = LabelSet::new();
        labels.insert("B", vec![vid(1)]);
        labels.insert("A", vec![vid(0)]);
        labels.insert("B", vec![vid(2)]);
        assert_eq!(labels.label_names(), &["B".to_string(), "A".to_string()]);
        assert_eq!(labels.label_vertices("B"), Some(&[vid(2)][..]));
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let surface = strip();
        let mut labels = LabelSet::new();
        labels.insert("A", vec![vid(0)]);
        labels.insert("B", vec![vid(3)]);
        labels.insert("Medial_wall", vec![vid(1)]);
        let (matrix, names) = region_distance_matrix(
            &EdgeDijkstra,
            &surface,
            &full_mask(),
            &labels,
            &DEFAULT_EXCLUSIONS,
        )
        .unwrap();
        assert_eq!(names, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(matrix.dim(), 2);
        assert_eq!(matrix.get(0, 0), 0.0);
        assert_eq!(matrix.get(1, 1), 0.0);
        assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
        // Shortest 0→3 route runs through vertex 1 or 2: length 2.
        assert!((matrix.get(0, 1) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_region_rejected() {
        let surface = strip();
        let mut labels = LabelSet::new();
        labels.insert("A", vec![vid(0)]);
        labels.insert("Empty", vec![]);
        let err = region_distance_matrix(
            &EdgeDijkstra,
            &surface,
            &full_mask(),
            &labels,
            &[],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CortexGeodesicsError::EmptyRegion(name) if name == "Empty"
        ));
    }

    #[test]
    fn all_labels_excluded_rejected() {
        let surface = strip();
        let mut labels = LabelSet::new();
        labels.insert("Unknown", vec![vid(0)]);
        assert!(matches!(
            region_distance_matrix(
                &EdgeDijkstra,
                &surface,
                &full_mask(),
                &labels,
                &DEFAULT_EXCLUSIONS,
            ),
            Err(CortexGeodesicsError::NoRegions)
        ));
    }

    #[test]
    fn out_of_cortex_member_is_tagged_with_region() {
        let surface = strip();
        let mask = CortexMask::new(vec![vid(0), vid(1), vid(2)], 4).unwrap();
        let mut labels = LabelSet::new();
        labels.insert("A", vec![vid(0)]);
        labels.insert("B", vec![vid(3)]); // off the cortex
        let err =
            region_distance_matrix(&EdgeDijkstra, &surface, &mask, &labels, &[]).unwrap_err();
        match err {
            CortexGeodesicsError::RegionSolve { region, source } => {
                assert_eq!(region, "B");
                assert!(matches!(
                    *source,
                    CortexGeodesicsError::OutOfCortex(v) if v == vid(3)
                ));
            }
            other => panic!("expected RegionSolve, got {other:?}"),
        }
    }
}

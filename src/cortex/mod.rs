//! Cortex restriction and full↔local index translation.
//!
//! The cortex is a strict subset of the surface vertices (the medial wall
//! and unlabeled vertices are excluded), and every geodesic query runs on
//! the restricted sub-mesh in a compact local numbering. [`CortexMask`]
//! owns the bidirectional mapping between the two spaces as a pair of fixed
//! arrays built once at construction: a forward array (local → full, the
//! mask itself) and an inverse array (full → local, `None` off the cortex).
//! [`CortexSubsurface`] is the restricted geometry the solver actually sees.
//!
//! Both directions of the mapping agree exactly by construction:
//! `to_full(local(v)) == v` for every cortex vertex `v`, and
//! `local(mask[i]) == i` for every local index `i`.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::CortexGeodesicsError;
use crate::solver::MeshView;
use crate::surface::{CortexId, Point3, Surface, VertexId};

/// Sorted, unique set of full-surface vertex indices marking the cortex,
/// plus the prebuilt inverse lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CortexMask {
    /// Forward map: cortex-local index → full-surface index. Strictly
    /// increasing.
    full_of: Vec<VertexId>,
    /// Inverse map: full-surface index → cortex-local index. Length equals
    /// the vertex count of the surface the mask was built for.
    local_of: Vec<Option<CortexId>>,
}

impl CortexMask {
    /// Builds a mask over a surface with `surface_len` vertices.
    ///
    /// Callers must supply a strictly increasing index list; this is
    /// validated rather than silently repaired.
    ///
    /// # Errors
    /// - [`CortexGeodesicsError::EmptyMask`] if `indices` is empty.
    /// - [`CortexGeodesicsError::MaskNotIncreasing`] on an unsorted or
    ///   duplicate entry, reporting the first offending position.
    /// - [`CortexGeodesicsError::MaskIndexOutOfRange`] if any index is
    ///   `>= surface_len`.
    pub fn new(indices: Vec<VertexId>, surface_len: usize) -> Result<Self, CortexGeodesicsError> {
        if indices.is_empty() {
            return Err(CortexGeodesicsError::EmptyMask);
        }
        for (pos, (a, b)) in indices.iter().tuple_windows().enumerate() {
            if b <= a {
                return Err(CortexGeodesicsError::MaskNotIncreasing { position: pos + 1 });
            }
        }
        // Strictly increasing, so the last entry is the maximum.
        if let Some(&last) = indices.last()
            && last.index() >= surface_len
        {
            return Err(CortexGeodesicsError::MaskIndexOutOfRange {
                index: last,
                vertex_count: surface_len,
            });
        }

        let mut local_of = vec![None; surface_len];
        for (i, &v) in indices.iter().enumerate() {
            local_of[v.index()] = Some(CortexId::new(i as u32));
        }
        Ok(Self {
            full_of: indices,
            local_of,
        })
    }

    /// Number of cortex vertices, `|C|`.
    #[inline]
    pub fn len(&self) -> usize {
        self.full_of.len()
    }

    /// A valid mask is never empty; provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.full_of.is_empty()
    }

    /// Vertex count of the full surface this mask was built for.
    #[inline]
    pub fn surface_len(&self) -> usize {
        self.local_of.len()
    }

    /// The mask as a strictly increasing slice of full-surface indices.
    #[inline]
    pub fn indices(&self) -> &[VertexId] {
        &self.full_of
    }

    /// Whether `v` lies on the cortex.
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.local_of.get(v.index()).is_some_and(|slot| slot.is_some())
    }

    /// Forward lookup: cortex-local → full-surface.
    ///
    /// Local indices only originate from this mask, so the lookup is
    /// infallible for any id the mask handed out.
    #[inline]
    pub fn to_full(&self, local: CortexId) -> VertexId {
        self.full_of[local.index()]
    }

    /// Inverse lookup: full-surface → cortex-local, `None` off the cortex.
    #[inline]
    pub fn local_index(&self, v: VertexId) -> Option<CortexId> {
        self.local_of.get(v.index()).copied().flatten()
    }

    /// Translates a source-node set of full-surface indices into
    /// cortex-local indices.
    ///
    /// # Errors
    /// [`CortexGeodesicsError::OutOfCortex`] naming the first source vertex
    /// that is not in the mask. A source outside the cortex is a caller
    /// error, never silently dropped.
    pub fn to_local(&self, sources: &[VertexId]) -> Result<Vec<CortexId>, CortexGeodesicsError> {
        sources
            .iter()
            .map(|&v| {
                self.local_index(v)
                    .ok_or(CortexGeodesicsError::OutOfCortex(v))
            })
            .collect()
    }
}

/// The cortex-restricted sub-mesh: mask-ordered vertex coordinates and the
/// triangles whose three corners all lie on the cortex, remapped to local
/// indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CortexSubsurface {
    vertices: Vec<Point3>,
    triangles: Vec<[CortexId; 3]>,
}

impl CortexSubsurface {
    /// Restricts `surface` to the vertices of `mask`.
    ///
    /// Triangles with any corner off the cortex are dropped; this is normal
    /// along the medial-wall boundary and reported at debug level, not an
    /// error.
    ///
    /// # Errors
    /// [`CortexGeodesicsError::SurfaceLengthMismatch`] if the mask was built
    /// for a different vertex count than `surface` has.
    pub fn extract(
        surface: &Surface,
        mask: &CortexMask,
    ) -> Result<Self, CortexGeodesicsError> {
        if mask.surface_len() != surface.vertex_count() {
            return Err(CortexGeodesicsError::SurfaceLengthMismatch {
                mask_surface: mask.surface_len(),
                surface: surface.vertex_count(),
            });
        }

        let vertices: Vec<Point3> = mask
            .indices()
            .iter()
            .map(|&v| surface.position(v))
            .collect();

        let mut triangles = Vec::with_capacity(surface.triangle_count());
        for tri in surface.triangles() {
            if let (Some(a), Some(b), Some(c)) = (
                mask.local_index(tri[0]),
                mask.local_index(tri[1]),
                mask.local_index(tri[2]),
            ) {
                triangles.push([a, b, c]);
            }
        }
        log::debug!(
            "cortex restriction: kept {}/{} vertices, {}/{} triangles",
            vertices.len(),
            surface.vertex_count(),
            triangles.len(),
            surface.triangle_count(),
        );

        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Number of cortex vertices, `|C|`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex coordinates in cortex-local order.
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Retained triangles over cortex-local indices.
    #[inline]
    pub fn triangles(&self) -> &[[CortexId; 3]] {
        &self.triangles
    }

    /// Borrowed raw-buffer view for the solver boundary.
    #[inline]
    pub fn as_mesh_view(&self) -> MeshView<'_> {
        MeshView {
            vertices: &self.vertices,
            triangles: bytemuck::cast_slice(&self.triangles),
        }
    }
}

//! Immutable triangle-surface geometry.
//!
//! A [`Surface`] is the full mesh as produced by a mesh loader: vertex
//! coordinates plus triangles. Construction validates every triangle index,
//! so the invariant "all triangle corners are `< vertex_count()`" holds for
//! the lifetime of the value and downstream code can index without checks.

use serde::{Deserialize, Serialize};

use super::vertex::VertexId;
use crate::error::CortexGeodesicsError;

/// 3D vertex position.
pub type Point3 = [f64; 3];

/// Triangle as three full-surface vertex indices.
pub type Triangle = [VertexId; 3];

/// A full triangulated surface mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    vertices: Vec<Point3>,
    triangles: Vec<Triangle>,
}

impl Surface {
    /// Builds a surface from loader output.
    ///
    /// # Errors
    /// Returns [`CortexGeodesicsError::TriangleOutOfRange`] if any triangle
    /// references a vertex index `>= vertices.len()`, and
    /// [`CortexGeodesicsError::SurfaceTooLarge`] if the vertex count does not
    /// fit the `u32` index space.
    pub fn new(
        vertices: Vec<Point3>,
        triangles: Vec<Triangle>,
    ) -> Result<Self, CortexGeodesicsError> {
        if vertices.len() > u32::MAX as usize {
            return Err(CortexGeodesicsError::SurfaceTooLarge(vertices.len()));
        }
        for (t, tri) in triangles.iter().enumerate() {
            for &v in tri {
                if v.index() >= vertices.len() {
                    return Err(CortexGeodesicsError::TriangleOutOfRange {
                        triangle: t,
                        index: v,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Number of vertices on the full surface.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Vertex coordinates, indexed by [`VertexId`].
    #[inline]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Triangles over full-surface indices.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Coordinates of a single vertex.
    #[inline]
    pub fn position(&self, v: VertexId) -> Point3 {
        self.vertices[v.index()]
    }
}

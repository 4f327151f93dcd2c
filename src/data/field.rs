//! Dense per-vertex value containers for the two index spaces.
//!
//! A [`DistanceField`] lives in cortex-local space (length `|C|`); a
//! [`FullSurfaceVector`] lives in full-surface space (length `n`).
//! Vertices unreachable from every source hold `f64::INFINITY` (the solver
//! sentinel); full-surface positions off the cortex hold `0`.

use serde::{Deserialize, Serialize};

use crate::surface::{CortexId, VertexId};

/// Distance from a source set to every cortex vertex, cortex-local order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceField {
    values: Vec<f64>,
}

impl DistanceField {
    /// Wraps a solver-produced per-vertex distance vector.
    #[inline]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of cortex vertices covered, `|C|`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All distances, indexed by [`CortexId`].
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Distance to a single cortex vertex.
    #[inline]
    pub fn get(&self, v: CortexId) -> f64 {
        self.values[v.index()]
    }

    /// Whether `v` is reachable from the source set.
    #[inline]
    pub fn is_reachable(&self, v: CortexId) -> bool {
        self.values[v.index()].is_finite()
    }

    /// Consumes the field, returning the raw vector.
    #[inline]
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// A dense vector over every full-surface vertex.
///
/// Cortex positions carry projected values; positions off the cortex carry
/// the scalar's zero: `0.0` for distances, `0` for zone ids (not a valid
/// zone, meaning "not assigned").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullSurfaceVector<T> {
    values: Vec<T>,
}

impl<T: Copy> FullSurfaceVector<T> {
    /// Wraps a full-length value vector.
    #[inline]
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Full-surface vertex count, `n`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values, indexed by [`VertexId`].
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Value at a full-surface vertex.
    #[inline]
    pub fn get(&self, v: VertexId) -> T {
        self.values[v.index()]
    }

    /// Consumes the vector, returning the raw storage.
    #[inline]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

/// Nearest-seed zone assignment over the full surface; `0` = unassigned.
pub type ZoneMap = FullSurfaceVector<u32>;

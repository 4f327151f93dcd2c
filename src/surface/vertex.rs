//! Typed vertex indices for the two coordinate spaces.
//!
//! A full-surface index and a cortex-local index are both a `u32` at
//! runtime, which is exactly how the two get mixed up. [`VertexId`] and
//! [`CortexId`] are `repr(transparent)` newtypes so the compiler keeps the
//! spaces apart; the only way to cross between them is through
//! [`CortexMask`](crate::cortex::CortexMask).
//!
//! Both types are `Pod`, so slices of typed triangles can be handed to a
//! solver as raw `u32` buffers without copying.

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Index of a vertex on the full surface, in `[0, n)`.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Pod,
    Zeroable,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(transparent)]
pub struct VertexId(u32);

impl VertexId {
    /// Wraps a raw full-surface index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the raw index widened for slice indexing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexId").field(&self.0).finish()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a vertex in the cortex-restricted sub-surface, in `[0, |C|)`.
///
/// Local index `i` corresponds to full-surface index `mask[i]`; see
/// [`CortexMask::to_full`](crate::cortex::CortexMask::to_full).
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Pod,
    Zeroable,
    serde::Serialize,
    serde::Deserialize,
)]
#[repr(transparent)]
pub struct CortexId(u32);

impl CortexId {
    /// Wraps a raw cortex-local index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the raw index widened for slice indexing.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for CortexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CortexId").field(&self.0).finish()
    }
}

impl fmt::Display for CortexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

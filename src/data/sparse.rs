//! Square sparse distance matrix in CSR form.
//!
//! Immutable once built: row offsets, column indices sorted within each
//! row, and values, in the style of a frozen CSR adjacency structure. The
//! same type serves cortex-local matrices (dimension `|C|`) and their
//! full-surface re-embeddings (dimension `n`, with empty rows for
//! non-cortex vertices); absent entries are implicit zeros.

use serde::{Deserialize, Serialize};

use crate::error::CortexGeodesicsError;

/// Sparse `dim × dim` matrix of pairwise distances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseDistanceMatrix {
    dim: usize,
    /// CSR row offsets, length `dim + 1`.
    row_offsets: Vec<usize>,
    /// Column index of each stored entry, sorted within a row.
    col_indices: Vec<u32>,
    /// Stored distances, parallel to `col_indices`.
    values: Vec<f64>,
}

impl SparseDistanceMatrix {
    /// Builds a matrix from `(row, col, value)` triplets.
    ///
    /// Triplets may arrive in any order; rows and columns are sorted during
    /// construction so iteration is deterministic.
    ///
    /// # Errors
    /// [`CortexGeodesicsError::EntryOutOfRange`] if any triplet references
    /// a row or column `>= dim`.
    pub fn from_triplets(
        dim: usize,
        mut triplets: Vec<(u32, u32, f64)>,
    ) -> Result<Self, CortexGeodesicsError> {
        for &(row, col, _) in &triplets {
            if row as usize >= dim || col as usize >= dim {
                return Err(CortexGeodesicsError::EntryOutOfRange { row, col, dim });
            }
        }
        triplets.sort_unstable_by_key(|&(row, col, _)| (row, col));

        let mut row_offsets = Vec::with_capacity(dim + 1);
        let mut col_indices = Vec::with_capacity(triplets.len());
        let mut values = Vec::with_capacity(triplets.len());
        row_offsets.push(0);
        let mut cursor = 0usize;
        for row in 0..dim as u32 {
            while cursor < triplets.len() && triplets[cursor].0 == row {
                col_indices.push(triplets[cursor].1);
                values.push(triplets[cursor].2);
                cursor += 1;
            }
            row_offsets.push(col_indices.len());
        }

        Ok(Self {
            dim,
            row_offsets,
            col_indices,
            values,
        })
    }

    /// Matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Stored entry at `(row, col)`, or `None` if implicit zero.
    pub fn get(&self, row: u32, col: u32) -> Option<f64> {
        let (start, end) = self.row_bounds(row)?;
        let cols = &self.col_indices[start..end];
        cols.binary_search(&col)
            .ok()
            .map(|k| self.values[start + k])
    }

    /// Stored entries of one row as `(col, value)` pairs.
    pub fn row(&self, row: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let (start, end) = self.row_bounds(row).unwrap_or((0, 0));
        self.col_indices[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, &val)| (col, val))
    }

    /// All stored entries as `(row, col, value)` triplets, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, f64)> + '_ {
        (0..self.dim as u32).flat_map(move |row| {
            self.row(row).map(move |(col, val)| (row, col, val))
        })
    }

    fn row_bounds(&self, row: u32) -> Option<(usize, usize)> {
        if (row as usize) < self.dim {
            Some((
                self.row_offsets[row as usize],
                self.row_offsets[row as usize + 1],
            ))
        } else {
            None
        }
    }
}

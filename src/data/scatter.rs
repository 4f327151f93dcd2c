//! Scattering cortex-space results back to full-surface index space.
//!
//! These operations only relabel: they never consult surface topology and
//! never recompute a distance. `scatter_values` places `field[i]` at
//! full-surface position `mask[i]` and fills every other position with the
//! scalar's zero; `scatter_matrix` relabels sparse entries into an
//! `n × n` structure without ever densifying (`n` can be two orders of
//! magnitude larger than `|C|`).

use crate::cortex::CortexMask;
use crate::data::field::{DistanceField, FullSurfaceVector};
use crate::data::sparse::SparseDistanceMatrix;
use crate::error::CortexGeodesicsError;

/// Scatters a cortex-local value vector to full-surface space.
///
/// Output length equals the mask's recorded surface length; positions off
/// the cortex read `T::default()`.
///
/// # Errors
/// [`CortexGeodesicsError::FieldLength`] if `values` does not have exactly
/// one entry per mask vertex.
pub fn scatter_values<T: Copy + Default>(
    values: &[T],
    mask: &CortexMask,
) -> Result<FullSurfaceVector<T>, CortexGeodesicsError> {
    if values.len() != mask.len() {
        return Err(CortexGeodesicsError::FieldLength {
            expected: mask.len(),
            actual: values.len(),
        });
    }
    let mut out = vec![T::default(); mask.surface_len()];
    for (&full, &value) in mask.indices().iter().zip(values) {
        out[full.index()] = value;
    }
    Ok(FullSurfaceVector::new(out))
}

/// Scatters a distance field to full-surface space; non-cortex vertices
/// read `0.0`.
pub fn scatter_field(
    field: &DistanceField,
    mask: &CortexMask,
) -> Result<FullSurfaceVector<f64>, CortexGeodesicsError> {
    scatter_values(field.values(), mask)
}

/// Re-embeds a cortex-local sparse matrix into full-surface space.
///
/// Each stored entry `(i, j, v)` becomes `(mask[i], mask[j], v)`; rows and
/// columns for non-cortex vertices exist but hold no entries. Sparsity is
/// preserved exactly.
///
/// # Errors
/// [`CortexGeodesicsError::MatrixDim`] if the matrix dimension is not the
/// mask length.
pub fn scatter_matrix(
    matrix: &SparseDistanceMatrix,
    mask: &CortexMask,
) -> Result<SparseDistanceMatrix, CortexGeodesicsError> {
    if matrix.dim() != mask.len() {
        return Err(CortexGeodesicsError::MatrixDim {
            expected: mask.len(),
            actual: matrix.dim(),
        });
    }
    let triplets: Vec<(u32, u32, f64)> = matrix
        .iter()
        .map(|(i, j, v)| {
            (
                mask.indices()[i as usize].get(),
                mask.indices()[j as usize].get(),
                v,
            )
        })
        .collect();
    SparseDistanceMatrix::from_triplets(mask.surface_len(), triplets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::VertexId;

    fn mask_1_3(surface_len: usize) -> CortexMask {
        CortexMask::new(vec![VertexId::new(1), VertexId::new(3)], surface_len).unwrap()
    }

    #[test]
    fn scatter_fills_zero_off_cortex() {
        let mask = mask_1_3(5);
        let field = DistanceField::new(vec![7.0, 9.0]);
        let full = scatter_field(&field, &mask).unwrap();
        assert_eq!(full.values(), &[0.0, 7.0, 0.0, 9.0, 0.0]);
    }

    #[test]
    fn scatter_length_mismatch() {
        let mask = mask_1_3(5);
        let field = DistanceField::new(vec![7.0]);
        assert!(matches!(
            scatter_field(&field, &mask),
            Err(CortexGeodesicsError::FieldLength {
                expected: 2,
                actual: 1,
            })
        ));
    }

    #[test]
    fn scatter_matrix_relabels() {
        let mask = mask_1_3(5);
        let local =
            SparseDistanceMatrix::from_triplets(2, vec![(0, 1, 4.0), (1, 0, 4.0)]).unwrap();
        let full = scatter_matrix(&local, &mask).unwrap();
        assert_eq!(full.dim(), 5);
        assert_eq!(full.nnz(), 2);
        assert_eq!(full.get(1, 3), Some(4.0));
        assert_eq!(full.get(3, 1), Some(4.0));
        assert_eq!(full.row(0).count(), 0);
        assert_eq!(full.row(2).count(), 0);
    }

    #[test]
    fn scatter_matrix_dim_mismatch() {
        let mask = mask_1_3(5);
        let local = SparseDistanceMatrix::from_triplets(3, vec![]).unwrap();
        assert!(matches!(
            scatter_matrix(&local, &mask),
            Err(CortexGeodesicsError::MatrixDim {
                expected: 2,
                actual: 3,
            })
        ));
    }
}

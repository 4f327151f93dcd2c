//! Projection fidelity: cortex-space results scattered to full-surface
//! space.

use cortex_geodesics::cortex::CortexMask;
use cortex_geodesics::data::{
    DistanceField, SparseDistanceMatrix, scatter_field, scatter_matrix, scatter_values,
};
use cortex_geodesics::error::CortexGeodesicsError;
use cortex_geodesics::surface::VertexId;
use proptest::prelude::*;

fn vid(raw: u32) -> VertexId {
    VertexId::new(raw)
}

#[test]
fn scattered_values_land_on_mask_positions() {
    let mask = CortexMask::new(vec![vid(0), vid(2), vid(5)], 6).unwrap();
    let field = DistanceField::new(vec![1.0, 2.0, 3.0]);
    let full = scatter_field(&field, &mask).unwrap();
    assert_eq!(full.values(), &[1.0, 0.0, 2.0, 0.0, 0.0, 3.0]);
}

#[test]
fn excluded_vertex_reads_zero_regardless_of_neighbors() {
    // Vertex 3 is off the cortex; its neighbors carry large values.
    let mask = CortexMask::new(vec![vid(0), vid(1), vid(2), vid(4)], 5).unwrap();
    let field = DistanceField::new(vec![9.0, 9.0, 9.0, 9.0]);
    let full = scatter_field(&field, &mask).unwrap();
    assert_eq!(full.get(vid(3)), 0.0);
}

#[test]
fn zone_values_scatter_with_zero_fill() {
    let mask = CortexMask::new(vec![vid(1), vid(3)], 4).unwrap();
    let full = scatter_values(&[2u32, 1u32], &mask).unwrap();
    assert_eq!(full.values(), &[0, 2, 0, 1]);
}

#[test]
fn matrix_projection_preserves_every_entry_and_nothing_else() {
    let mask = CortexMask::new(vec![vid(1), vid(2), vid(4)], 6).unwrap();
    let local = SparseDistanceMatrix::from_triplets(
        3,
        vec![(0, 1, 1.5), (1, 0, 1.5), (0, 2, 2.5), (2, 0, 2.5)],
    )
    .unwrap();
    let full = scatter_matrix(&local, &mask).unwrap();

    assert_eq!(full.dim(), 6);
    assert_eq!(full.nnz(), local.nnz());
    assert_eq!(full.get(1, 2), Some(1.5));
    assert_eq!(full.get(2, 1), Some(1.5));
    assert_eq!(full.get(1, 4), Some(2.5));
    assert_eq!(full.get(4, 1), Some(2.5));
    // Rows of non-cortex vertices are present but empty.
    for off in [0u32, 3, 5] {
        assert_eq!(full.row(off).count(), 0);
    }
}

#[test]
fn mismatched_inputs_are_rejected() {
    let mask = CortexMask::new(vec![vid(0), vid(1)], 3).unwrap();
    assert!(matches!(
        scatter_field(&DistanceField::new(vec![1.0]), &mask),
        Err(CortexGeodesicsError::FieldLength {
            expected: 2,
            actual: 1,
        })
    ));
    let wrong = SparseDistanceMatrix::from_triplets(5, vec![]).unwrap();
    assert!(matches!(
        scatter_matrix(&wrong, &mask),
        Err(CortexGeodesicsError::MatrixDim {
            expected: 2,
            actual: 5,
        })
    ));
}

fn mask_and_field() -> impl Strategy<Value = (CortexMask, Vec<f64>)> {
    proptest::collection::btree_set(0u32..120, 1..40).prop_flat_map(|raw| {
        let indices: Vec<VertexId> = raw.iter().copied().map(VertexId::new).collect();
        let len = indices.len();
        (
            Just(CortexMask::new(indices, 120).unwrap()),
            proptest::collection::vec(-1.0e6..1.0e6f64, len),
        )
    })
}

proptest! {
    /// `scatter(f, C)[C[i]] == f[i]`, and `0` everywhere off the mask.
    #[test]
    fn projection_fidelity((mask, values) in mask_and_field()) {
        let full = scatter_values(&values, &mask).unwrap();
        prop_assert_eq!(full.len(), mask.surface_len());
        for (i, &v) in mask.indices().iter().enumerate() {
            prop_assert_eq!(full.get(v), values[i]);
        }
        for raw in 0..mask.surface_len() as u32 {
            let v = VertexId::new(raw);
            if !mask.contains(v) {
                prop_assert_eq!(full.get(v), 0.0);
            }
        }
    }
}

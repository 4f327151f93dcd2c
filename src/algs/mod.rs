//! Algorithms over the cortex sub-mesh: distance queries, zone
//! partitioning, and region matrices.

pub mod distance;
pub mod regions;
pub mod zones;

pub use distance::{
    distance_field, distance_from_sources, pairwise_distance_matrix, pairwise_within,
};
pub use regions::{
    DEFAULT_EXCLUSIONS, LabelCollection, LabelSet, RegionDistanceMatrix, region_distance_matrix,
};
pub use zones::nearest_seed_zones;

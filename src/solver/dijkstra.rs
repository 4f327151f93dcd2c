//! Edge-graph Dijkstra geodesic solver.
//!
//! Shortest path along mesh edges with Euclidean edge lengths: exact on the
//! edge graph, an upper bound on the true surface geodesic. Adjacency is
//! built once per call as a CSR structure; the single-source query is a
//! multi-source binary-heap Dijkstra (every source starts at distance 0, so
//! the result is the minimum distance to any source), and the bounded
//! all-pairs query runs one radius-limited search per vertex in parallel.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rayon::prelude::*;

use super::{GeodesicSolver, MeshView, SolverFailure};

/// The built-in solver. Stateless; one value serves any number of queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDijkstra;

/// CSR vertex adjacency with per-edge Euclidean weights.
struct EdgeGraph {
    offsets: Vec<usize>,
    neighbors: Vec<u32>,
    weights: Vec<f64>,
}

impl EdgeGraph {
    fn build(mesh: &MeshView<'_>) -> Result<Self, SolverFailure> {
        let n = mesh.vertex_count();

        // Undirected edge set from the triangles, one entry per direction.
        let mut edges: Vec<(u32, u32)> = Vec::with_capacity(mesh.triangles.len() * 6);
        for tri in mesh.triangles {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                edges.push((a, b));
                edges.push((b, a));
            }
        }
        edges.sort_unstable();
        edges.dedup();

        let mut offsets = vec![0usize; n + 1];
        for &(a, _) in &edges {
            offsets[a as usize + 1] += 1;
        }
        for v in 0..n {
            offsets[v + 1] += offsets[v];
        }

        let mut neighbors = Vec::with_capacity(edges.len());
        let mut weights = Vec::with_capacity(edges.len());
        for &(a, b) in &edges {
            let w = euclid(mesh.vertices[a as usize], mesh.vertices[b as usize]);
            if !w.is_finite() {
                return Err(SolverFailure::DegenerateGeometry(format!(
                    "edge ({a}, {b}) has non-finite length"
                )));
            }
            neighbors.push(b);
            weights.push(w);
        }

        Ok(Self {
            offsets,
            neighbors,
            weights,
        })
    }

    #[inline]
    fn neighbors_of(&self, v: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let (start, end) = (self.offsets[v as usize], self.offsets[v as usize + 1]);
        self.neighbors[start..end]
            .iter()
            .zip(&self.weights[start..end])
            .map(|(&nbr, &w)| (nbr, w))
    }

    /// Best-first search from `sources`, optionally stopping at `bound`.
    /// Returns one distance per vertex, `INFINITY` where unreached.
    fn search(&self, n: usize, sources: &[u32], bound: Option<f64>) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; n];
        let mut heap = BinaryHeap::with_capacity(sources.len());
        for &s in sources {
            dist[s as usize] = 0.0;
            heap.push(HeapEntry {
                dist: 0.0,
                vertex: s,
            });
        }

        while let Some(entry) = heap.pop() {
            if entry.dist > dist[entry.vertex as usize] {
                continue; // stale heap entry
            }
            for (nbr, w) in self.neighbors_of(entry.vertex) {
                let next = entry.dist + w;
                if bound.is_some_and(|b| next > b) {
                    continue;
                }
                if next < dist[nbr as usize] {
                    dist[nbr as usize] = next;
                    heap.push(HeapEntry {
                        dist: next,
                        vertex: nbr,
                    });
                }
            }
        }
        dist
    }
}

/// Min-heap entry ordered by distance.
#[derive(Clone, Copy, PartialEq)]
struct HeapEntry {
    dist: f64,
    vertex: u32,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the BinaryHeap pops the smallest distance first.
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[inline]
fn euclid(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

impl GeodesicSolver for EdgeDijkstra {
    fn distance_field(
        &self,
        mesh: MeshView<'_>,
        sources: &[u32],
    ) -> Result<Vec<f64>, SolverFailure> {
        let n = mesh.vertex_count();
        for &s in sources {
            if s as usize >= n {
                return Err(SolverFailure::SourceOutOfRange {
                    index: s,
                    vertex_count: n,
                });
            }
        }
        let graph = EdgeGraph::build(&mesh)?;
        Ok(graph.search(n, sources, None))
    }

    fn bounded_matrix(
        &self,
        mesh: MeshView<'_>,
        max_distance: f64,
    ) -> Result<Vec<(u32, u32, f64)>, SolverFailure> {
        let n = mesh.vertex_count();
        let graph = EdgeGraph::build(&mesh)?;
        log::trace!("bounded all-pairs over {n} vertices, radius {max_distance}");

        let rows: Vec<Vec<(u32, u32, f64)>> = (0..n as u32)
            .into_par_iter()
            .map(|source| {
                let dist = graph.search(n, &[source], Some(max_distance));
                dist.iter()
                    .enumerate()
                    .filter(|&(j, &d)| j as u32 != source && d <= max_distance)
                    .map(|(j, &d)| (source, j as u32, d))
                    .collect()
            })
            .collect();

        Ok(rows.into_iter().flatten().collect())
    }
}

//! Brute-force cosine-distance nearest-neighbor search

use ndarray::{Array2, ArrayView1};

/// Default number of neighbors returned by a query.
pub const DEFAULT_NEIGHBORS: usize = 5;

/// One ranked row of the corpus matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f32,
}

/// Exact nearest-neighbor index over an in-memory corpus matrix.
///
/// Built once from the weighted corpus matrix and immutable afterwards. At
/// catalog scale (low thousands of rows) a full scan per query is cheap, so
/// no approximate structure is used.
pub struct NeighborIndex {
    matrix: Array2<f32>,
    row_norms: Vec<f32>,
    n_neighbors: usize,
}

impl NeighborIndex {
    pub fn fit(matrix: Array2<f32>, n_neighbors: usize) -> Self {
        let row_norms = matrix
            .rows()
            .into_iter()
            .map(|row| row.dot(&row).sqrt())
            .collect();

        Self {
            matrix,
            row_norms,
            n_neighbors,
        }
    }

    /// Return the `min(k, rows)` nearest rows by ascending cosine distance.
    ///
    /// Ties (including the degenerate zero-vector query, which is at distance
    /// 1.0 from every row) are broken by ascending row index, so the ordering
    /// is stable across runs.
    pub fn kneighbors(&self, query: &ArrayView1<f32>, k: usize) -> Vec<Neighbor> {
        let query_norm = query.dot(query).sqrt();

        let mut neighbors: Vec<Neighbor> = self
            .matrix
            .rows()
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let denom = query_norm * self.row_norms[index];
                let distance = if denom > 0.0 {
                    1.0 - row.dot(query) / denom
                } else {
                    1.0
                };
                Neighbor { index, distance }
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.index.cmp(&b.index))
        });
        neighbors.truncate(k.min(self.len()));
        neighbors
    }

    /// Nearest rows using the index's configured neighbor count.
    pub fn nearest(&self, query: &ArrayView1<f32>) -> Vec<Neighbor> {
        self.kneighbors(query, self.n_neighbors)
    }

    /// Number of corpus rows.
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    fn index() -> NeighborIndex {
        // Three unit rows: x, y, and the diagonal between them
        let matrix = arr2(&[
            [1.0, 0.0],
            [0.0, 1.0],
            [std::f32::consts::FRAC_1_SQRT_2, std::f32::consts::FRAC_1_SQRT_2],
        ]);
        NeighborIndex::fit(matrix, DEFAULT_NEIGHBORS)
    }

    #[test]
    fn test_orders_by_ascending_distance() {
        let index = index();
        let query = arr1(&[1.0, 0.0]);
        let neighbors = index.kneighbors(&query.view(), 3);

        assert_eq!(neighbors.len(), 3);
        assert_eq!(neighbors[0].index, 0);
        assert_eq!(neighbors[1].index, 2);
        assert_eq!(neighbors[2].index, 1);
        assert!(neighbors.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_k_capped_at_corpus_size() {
        let index = index();
        let query = arr1(&[1.0, 0.0]);
        assert_eq!(index.kneighbors(&query.view(), 10).len(), 3);
        assert_eq!(index.kneighbors(&query.view(), 2).len(), 2);
    }

    #[test]
    fn test_zero_query_vector_ties_by_row_index() {
        let index = index();
        let query = arr1(&[0.0, 0.0]);
        let neighbors = index.kneighbors(&query.view(), 3);

        let indices: Vec<usize> = neighbors.iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(neighbors.iter().all(|n| (n.distance - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_nearest_uses_configured_neighbor_count() {
        let matrix = arr2(&[[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
        let index = NeighborIndex::fit(matrix, 2);
        let query = arr1(&[1.0, 0.0]);
        assert_eq!(index.nearest(&query.view()).len(), 2);
    }

    #[test]
    fn test_distance_bounds_on_nonnegative_vectors() {
        let index = index();
        let query = arr1(&[0.3, 0.9]);
        for neighbor in index.kneighbors(&query.view(), 3) {
            assert!(neighbor.distance >= -1e-6);
            assert!(neighbor.distance <= 1.0 + 1e-6);
        }
    }
}

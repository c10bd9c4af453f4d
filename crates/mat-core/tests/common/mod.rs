//! Shared utilities for integration tests

#![allow(dead_code)]

use mat_core::Matrix;
use proptest::collection::vec;
use proptest::prelude::*;

/// Dimensions that cover the scalar case, the benchmark size and a few odd sizes
pub fn edge_case_dimensions() -> Vec<usize> {
    vec![1, 2, 3, 4, 5, 7, 8, 16]
}

/// Build an `i64` matrix, panicking on invalid input
pub fn int_matrix(n: usize, data: &[i64]) -> Matrix<i64> {
    Matrix::new(n, data.to_vec()).expect("valid test matrix")
}

/// Strategy for a dimension together with `count` matrices of that size
///
/// Element values stay small so products of three matrices cannot overflow.
pub fn same_size_matrices(count: usize) -> impl Strategy<Value = Vec<Matrix<i64>>> {
    (1usize..=6).prop_flat_map(move |n| {
        vec(vec(-100i64..=100, n * n), count).prop_map(move |all| {
            all.into_iter()
                .map(|data| Matrix::new(n, data).expect("strategy yields n*n elements"))
                .collect()
        })
    })
}

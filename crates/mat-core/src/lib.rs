//! Dense square matrix arithmetic
//!
//! A small immutable matrix type with the three operations the
//! micro-benchmark exercises:
//!
//! - **add**: elementwise sum
//! - **multiply**: naive O(n³) triple-loop product
//! - **diagonal_sum**: trace of the matrix
//!
//! Binary operations check that both operands share a dimension and
//! report [`Error::DimensionMismatch`] otherwise.
//!
//! # Example
//!
//! ```rust
//! use mat_core::Matrix;
//!
//! let a = Matrix::new(2, vec![0i64, 1, 2, 3]).unwrap();
//! let c = a.add(&a).unwrap();
//! let d = c.multiply(&a).unwrap().multiply(&a).unwrap();
//! assert_eq!(d.diagonal_sum(), 90);
//! ```

pub mod element;
pub mod error;
pub mod matrix;

// Re-export main types
pub use element::Element;
pub use error::{Error, Result};
pub use matrix::Matrix;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Element, Error, Matrix, Result};
}

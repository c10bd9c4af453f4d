//! Error types for matrix construction and arithmetic

use thiserror::Error;

/// Errors raised by [`Matrix`](crate::Matrix) construction and operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Dimension is zero or does not match the number of supplied elements
    #[error("Invalid dimension: cannot build a {dimension}x{dimension} matrix from {len} elements")]
    InvalidDimension { dimension: usize, len: usize },

    /// Operands of a binary operation have different dimensions
    #[error("Dimension mismatch in {op}: {left}x{left} vs {right}x{right}")]
    DimensionMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    /// Generated element value does not fit in the element type
    #[error("Value {value} is not representable in the element type")]
    Unrepresentable { value: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check that `len` elements can fill an `n`x`n` matrix
    pub fn check_dimension(n: usize, len: usize) -> Result<()> {
        if n == 0 || n.checked_mul(n) != Some(len) {
            return Err(Error::InvalidDimension { dimension: n, len });
        }
        Ok(())
    }

    /// Check that both operands of `op` share a dimension
    pub fn check_same_dimension(op: &'static str, left: usize, right: usize) -> Result<()> {
        if left != right {
            return Err(Error::DimensionMismatch { op, left, right });
        }
        Ok(())
    }
}

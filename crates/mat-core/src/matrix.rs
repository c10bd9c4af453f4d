//! Dense square matrix stored in row-major order
//!
//! The arithmetic here is deliberately naive: elementwise addition, the
//! textbook triple loop for multiplication and a strided walk for the
//! diagonal sum. The benchmark measures exactly these access patterns, so
//! no blocking or vectorisation is attempted.

use crate::{Element, Error, Result};
use num_traits::FromPrimitive;
use std::fmt;

/// Immutable `n`x`n` matrix
///
/// Element `(row, col)` lives at flat index `row * n + col`. Every
/// instance holds exactly `n * n` elements with `n >= 1`; operations
/// return new matrices and never mutate their operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    n: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Build a matrix from a dimension and row-major elements
    ///
    /// # Errors
    /// [`Error::InvalidDimension`] if `n == 0` or `data.len() != n * n`.
    pub fn new(n: usize, data: Vec<T>) -> Result<Self> {
        Error::check_dimension(n, data.len())?;
        Ok(Self { n, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every position
    pub fn from_fn<F>(n: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let len = n.checked_mul(n).unwrap_or(0);
        Error::check_dimension(n, len)?;

        let mut data = Vec::with_capacity(len);
        for row in 0..n {
            for col in 0..n {
                data.push(f(row, col));
            }
        }
        Ok(Self { n, data })
    }

    /// Additive identity
    pub fn zeros(n: usize) -> Result<Self> {
        Self::from_fn(n, |_, _| T::zero())
    }

    /// Multiplicative identity
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, |row, col| if row == col { T::one() } else { T::zero() })
    }

    /// Dimension `n` of the `n`x`n` matrix
    #[inline]
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Number of stored elements, always `n * n`
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; a matrix holds at least one element
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the elements
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element at `(row, col)`, or `None` when either index is out of range
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.n || col >= self.n {
            return None;
        }
        Some(self.data[row * self.n + col])
    }

    /// Elementwise sum `self + other`
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the operands differ in dimension.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Error::check_same_dimension("add", self.n, other.n)?;

        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&x, &y)| x + y)
            .collect();

        Ok(Self { n: self.n, data })
    }

    /// Matrix product `self * other` by the textbook triple loop
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] if the operands differ in dimension.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        Error::check_same_dimension("multiply", self.n, other.n)?;

        let n = self.n;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + self.data[i * n + k] * other.data[k * n + j];
                }
                data.push(sum);
            }
        }

        Ok(Self { n, data })
    }

    /// Sum of the main diagonal (trace)
    pub fn diagonal_sum(&self) -> T {
        self.data
            .iter()
            .step_by(self.n + 1)
            .fold(T::zero(), |acc, &x| acc + x)
    }
}

impl<T: Element + FromPrimitive> Matrix<T> {
    /// Matrix holding `0, 1, ..., n*n - 1` in row-major order
    ///
    /// # Errors
    /// [`Error::Unrepresentable`] if `n * n - 1` does not fit in `T`.
    pub fn sequential(n: usize) -> Result<Self> {
        let len = n.checked_mul(n).unwrap_or(0);
        Error::check_dimension(n, len)?;

        let data = (0..len)
            .map(|i| T::from_usize(i).ok_or(Error::Unrepresentable { value: i }))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { n, data })
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.data.chunks(self.n).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for (col_idx, value) in row.iter().enumerate() {
                if col_idx > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

//! Element trait for matrix entries
//!
//! Any copyable type with additive and multiplicative identities qualifies,
//! so the same matrix code runs over integers and floats alike.

use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul};

/// Numeric type that can be stored in a [`Matrix`](crate::Matrix)
///
/// Blanket-implemented for every type meeting the bounds; `i64` and `f64`
/// are the usual choices.
pub trait Element:
    Copy + Debug + Display + PartialEq + Zero + One + Add<Output = Self> + Mul<Output = Self>
{
}

impl<T> Element for T where
    T: Copy + Debug + Display + PartialEq + Zero + One + Add<Output = T> + Mul<Output = T>
{
}

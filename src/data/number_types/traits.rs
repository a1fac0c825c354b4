//! # Traits
//!
//! The linear programs in this crate are small and are solved in floating point arithmetic. All
//! comparisons against zero are made with a tolerance, which is configured as an `f64` and
//! converted into the number type that the algorithm is instantiated with.
use std::fmt::{Debug, Display};

use num_traits::{Float, FromPrimitive};

/// Numbers that the algorithms can be instantiated with.
///
/// Automatically implemented for all types satisfying the trait's bounds, which includes `f32` and
/// `f64`.
pub trait Real: Float + FromPrimitive + Display + Debug {
    /// Convert a configured constant into this number type.
    ///
    /// # Arguments
    ///
    /// * `value`: Typically a tolerance from the `Config`.
    ///
    /// # Return value
    ///
    /// The closest representable value. Falls back to machine epsilon for types that can't
    /// represent the value at all.
    fn from_config(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::epsilon)
    }

    /// Whether this value is within `epsilon` of zero.
    fn is_negligible(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}
impl<T: Float + FromPrimitive + Display + Debug> Real for T {
}

#[cfg(test)]
mod test {
    use crate::data::number_types::traits::Real;

    #[test]
    fn from_config() {
        assert_eq!(f64::from_config(1e-9), 1e-9);
        assert_eq!(f32::from_config(0.5), 0.5);
    }

    #[test]
    fn is_negligible() {
        assert!(1e-12_f64.is_negligible(1e-9));
        assert!((-1e-12_f64).is_negligible(1e-9));
        assert!(!1e-6_f64.is_negligible(1e-9));
    }
}

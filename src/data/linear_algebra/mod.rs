//! # Linear algebra primitives
//!
//! Dense helpers: inner products, rounding of coordinates and the solving of the small square
//! systems that describe the intersection of constraint boundaries.
use crate::data::number_types::traits::Real;

pub mod system;

/// Inner product of two slices of equal length.
pub fn inner_product<F: Real>(left: &[F], right: &[F]) -> F {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).fold(F::zero(), |total, (&l, &r)| total + l * r)
}

/// Round a value to a fixed number of decimals.
///
/// # Arguments
///
/// * `value`: Value to round.
/// * `decimals`: Number of decimals to keep.
///
/// # Return value
///
/// The value rounded half away from zero, in the same number type.
pub fn round_to_decimals<F: Real>(value: F, decimals: u32) -> F {
    let scale = F::from_config(10_f64.powi(decimals as i32));
    (value * scale).round() / scale
}

/// Hashable form of a value rounded to a fixed number of decimals: mantissa, exponent and sign.
pub type RoundedKey = (u64, i16, i8);

/// Key of a value rounded to a fixed number of decimals.
///
/// Used to compare points for equality after rounding without comparing floats directly. The key
/// is the exact decomposition of the scaled and rounded float, so values of any magnitude keep
/// distinct keys unless they round to the same number.
pub fn rounded_key<F: Real>(value: F, decimals: u32) -> RoundedKey {
    let scale = F::from_config(10_f64.powi(decimals as i32));
    let rounded = (value * scale).round();
    // Negative zero and positive zero share a key
    let rounded = if rounded == F::zero() { F::zero() } else { rounded };
    rounded.integer_decode()
}

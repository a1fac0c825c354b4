//! # Representation of solutions
//!
//! Points in the space of decision variables, and the optimal solution of a linear program as it
//! is presented to the user.
use std::fmt;

use crate::data::linear_algebra::{round_to_decimals, rounded_key, RoundedKey};
use crate::data::number_types::traits::Real;

/// Number of decimals used when no precision is requested while formatting.
const DEFAULT_DISPLAY_DECIMALS: usize = 2;

/// Coordinates in the space of decision variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<F> {
    coordinates: Vec<F>,
}

impl<F: Real> Point<F> {
    #[allow(missing_docs)]
    pub fn new(coordinates: Vec<F>) -> Self {
        Self { coordinates }
    }

    /// The origin in the given dimension.
    pub fn origin(dimension: usize) -> Self {
        Self::new(vec![F::zero(); dimension])
    }

    #[allow(missing_docs)]
    pub fn coordinates(&self) -> &[F] {
        &self.coordinates
    }

    #[allow(missing_docs)]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Whether all coordinates are within `epsilon` of zero.
    pub fn is_origin(&self, epsilon: F) -> bool {
        self.coordinates.iter().all(|&x| x.is_negligible(epsilon))
    }

    /// Key that is equal for points that are equal after rounding to `decimals` decimals.
    pub fn rounded_key(&self, decimals: u32) -> Vec<RoundedKey> {
        self.coordinates.iter().map(|&x| rounded_key(x, decimals)).collect()
    }

    /// A copy of this point with each coordinate rounded to `decimals` decimals.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self::new(self.coordinates.iter().map(|&x| round_to_decimals(x, decimals)).collect())
    }
}

impl<F> From<Vec<F>> for Point<F> {
    fn from(coordinates: Vec<F>) -> Self {
        Self { coordinates }
    }
}

impl<F> AsRef<[F]> for Point<F> {
    fn as_ref(&self) -> &[F] {
        &self.coordinates
    }
}

/// Formats as `(x1, x2, ...)`, with two decimals unless a precision is given.
impl<F: Real> fmt::Display for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_DECIMALS);
        f.write_str("(")?;
        for (i, x) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:.*}", precision, without_negative_zero(*x, precision))?;
        }
        f.write_str(")")
    }
}

/// An optimal solution to a linear program.
///
/// Produced once per solve, and not modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    point: Point<F>,
    objective_value: F,
}

impl<F: Real> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// # Arguments
    ///
    /// * `point`: Values of the decision variables.
    /// * `objective_value`: Value of the objective function at that point.
    pub fn new(point: Point<F>, objective_value: F) -> Self {
        Self { point, objective_value }
    }

    #[allow(missing_docs)]
    pub fn point(&self) -> &Point<F> {
        &self.point
    }

    #[allow(missing_docs)]
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Human readable summary, with values rounded to `decimals` decimals.
    pub fn summary(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self)
    }
}

impl<F: Real> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_DECIMALS);
        writeln!(f, "Optimal solution: {:.*}", precision, self.point)?;
        write!(f, "Optimal value: {:.*}", precision, without_negative_zero(self.objective_value, precision))
    }
}

/// Values that round to zero are printed as `0`, not as `-0`.
fn without_negative_zero<F: Real>(value: F, precision: usize) -> F {
    let half_unit = 0.5 * 10_f64.powi(-i32::try_from(precision).unwrap_or(i32::MAX));
    if value.is_negligible(F::from_config(half_unit)) {
        F::zero()
    } else {
        value
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::solution::{Point, Solution};

    #[test]
    fn no_negative_zero() {
        let point = Point::new(vec![-1e-12_f64, -0_f64, -0.004_f64]);
        assert_eq!(point.to_string(), "(0.00, 0.00, 0.00)");
        assert_eq!(format!("{:.3}", point), "(0.000, 0.000, -0.004)");
    }

    #[test]
    fn origin() {
        assert!(Point::<f64>::origin(3).is_origin(1e-9));
        assert!(Point::new(vec![1e-12_f64, -1e-12_f64]).is_origin(1e-9));
        assert!(!Point::new(vec![0_f64, 1e-3_f64]).is_origin(1e-9));
    }

    #[test]
    fn rounding() {
        let point = Point::new(vec![20_f64 / 3_f64, 1.0004_f64]);
        assert_eq!(point.rounded_key(3), Point::new(vec![6.667_f64, 1_f64]).rounded_key(3));
        assert_ne!(point.rounded_key(3), Point::new(vec![6.666_f64, 1_f64]).rounded_key(3));
        assert_eq!(point.rounded(2), Point::new(vec![6.67, 1_f64]));
    }

    #[test]
    fn display() {
        let point = Point::new(vec![20_f64 / 3_f64, 2_f64]);
        assert_eq!(point.to_string(), "(6.67, 2.00)");
        assert_eq!(format!("{:.1}", point), "(6.7, 2.0)");

        let solution = Solution::new(point, 100_f64 / 3_f64);
        assert_eq!(solution.to_string(), "Optimal solution: (6.67, 2.00)\nOptimal value: 33.33");
        assert_eq!(solution.summary(0), "Optimal solution: (7, 2)\nOptimal value: 33");
    }
}

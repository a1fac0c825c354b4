//! # Feasibility of points
//!
//! Vertices are computed in floating point arithmetic and would be rejected by an exact test due to
//! rounding noise. All checks in this module therefore allow a violation of at most `epsilon`.
use crate::data::linear_program::elements::Constraint;
use crate::data::number_types::traits::Real;

/// Whether a point satisfies every constraint.
///
/// Stops at the first violated constraint.
///
/// # Arguments
///
/// * `point`: Coordinates, one per decision variable.
/// * `constraints`: All constraints of the problem.
/// * `epsilon`: Maximum violation that is tolerated for each constraint.
pub fn is_feasible<F: Real>(point: &[F], constraints: &[Constraint<F>], epsilon: F) -> bool {
    constraints.iter().all(|constraint| constraint.is_satisfied_by(point, epsilon))
}

/// Index of the first constraint that the point violates, if any.
pub fn first_violated<F: Real>(point: &[F], constraints: &[Constraint<F>], epsilon: F) -> Option<usize> {
    constraints.iter().position(|constraint| !constraint.is_satisfied_by(point, epsilon))
}

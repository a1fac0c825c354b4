//! # Representing linear programs
//!
//! A linear program consists of an objective function and a list of inequality constraints, all
//! expressed in the same number of decision variables. The `LinearProgram` type is only constructed
//! after that has been validated.
use thiserror::Error;

use crate::data::linear_program::elements::{Constraint, Objective};
use crate::data::number_types::traits::Real;

pub mod elements;
pub mod feasibility;
pub mod solution;

/// The problem description is inconsistent, and can't be solved.
///
/// This is detected before any solving starts.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum MalformedInput {
    /// The objective function has no coefficients.
    #[error("the objective function has no coefficients")]
    Empty,
    /// A constraint has a different number of coefficients than the objective function.
    #[error("constraint {index} has {found} coefficients, but the objective has {expected}")]
    DimensionMismatch {
        /// Position of the constraint in the constraint list.
        index: usize,
        /// Number of coefficients of the objective function.
        expected: usize,
        /// Number of coefficients of the constraint.
        found: usize,
    },
    /// A coefficient or bound is NaN or infinite.
    #[error("{location} is not a finite number")]
    NonFinite {
        /// Human readable description of where the value was found.
        location: String,
    },
}

/// A validated linear program.
///
/// All constraints and the objective function share the same dimension, and all numbers are
/// finite.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    objective: Objective<F>,
    constraints: Vec<Constraint<F>>,
}

impl<F: Real> LinearProgram<F> {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `objective`: Function to optimize.
    /// * `constraints`: Inequalities, may be empty.
    ///
    /// # Errors
    ///
    /// If the dimensions don't match, or a number is not finite.
    pub fn new(objective: Objective<F>, constraints: Vec<Constraint<F>>) -> Result<Self, MalformedInput> {
        let dimension = objective.dimension();
        if dimension == 0 {
            return Err(MalformedInput::Empty);
        }
        if let Some(j) = objective.coefficients().iter().position(|c| !c.is_finite()) {
            return Err(MalformedInput::NonFinite { location: format!("objective coefficient {}", j) });
        }

        for (index, constraint) in constraints.iter().enumerate() {
            if constraint.dimension() != dimension {
                return Err(MalformedInput::DimensionMismatch {
                    index,
                    expected: dimension,
                    found: constraint.dimension(),
                });
            }
            if let Some(j) = constraint.coefficients().iter().position(|c| !c.is_finite()) {
                return Err(MalformedInput::NonFinite {
                    location: format!("coefficient {} of constraint {}", j, index),
                });
            }
            if !constraint.bound().is_finite() {
                return Err(MalformedInput::NonFinite { location: format!("bound of constraint {}", index) });
            }
        }

        Ok(Self { objective, constraints })
    }

    #[allow(missing_docs)]
    pub fn objective(&self) -> &Objective<F> {
        &self.objective
    }

    #[allow(missing_docs)]
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Number of decision variables.
    pub fn dimension(&self) -> usize {
        self.objective.dimension()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }
}

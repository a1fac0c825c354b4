//! # Small linear programs, solved two ways
//!
//! Linear programs in a handful of variables are solved by enumerating the vertices of the
//! feasible region (the graphical method, generalized to `n` dimensions) and by the Simplex method
//! on a dense tableau. The vertices are kept for drawing the feasible region; drawing itself is
//! left to the caller.
//!
//! ```
//! use graphical_lp::algorithm::{solve, SolveOutcome};
//! use graphical_lp::data::linear_program::elements::{Constraint, Objective};
//!
//! let outcome = solve(
//!     Objective::maximize(vec![3_f64, 2_f64]),
//!     vec![
//!         Constraint::less(vec![2_f64, 1_f64], 20_f64),
//!         Constraint::less(vec![1_f64, 2_f64], 20_f64),
//!         Constraint::greater(vec![1_f64, 0_f64], 0_f64),
//!         Constraint::greater(vec![0_f64, 1_f64], 0_f64),
//!     ],
//! );
//! assert!(matches!(outcome, SolveOutcome::Optimal { .. }));
//! assert_eq!(outcome.summary(2), "Optimal solution: (6.67, 6.67)\nOptimal value: 33.33");
//! ```
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod algorithm;
pub mod config;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;

//! Mutually exclusive constraints.
//!
//! Maximize `x + y` subject to `x <= 1` and `x >= 2`.
use crate::algorithm::{solve, SolveOutcome};
use crate::algorithm::graphical::{Candidate, enumerate_feasible_vertices};
use crate::config::Config;
use crate::data::linear_program::elements::{Constraint, Objective};

fn constraints() -> Vec<Constraint<f64>> {
    vec![
        Constraint::less(vec![1_f64, 0_f64], 1_f64),
        Constraint::greater(vec![1_f64, 0_f64], 2_f64),
    ]
}

#[test]
fn no_vertices() {
    let vertices = enumerate_feasible_vertices(&constraints(), 2, &Config::default());

    assert!(vertices.is_empty());
    assert_eq!(vertices.tally()[Candidate::Singular], 1);
}

#[test]
fn outcome() {
    let outcome = solve(Objective::maximize(vec![1_f64, 1_f64]), constraints());

    assert_eq!(outcome, SolveOutcome::Infeasible);
    assert_eq!(outcome.to_string(), "No feasible solution");
}

#[test]
fn one_dimensional() {
    let outcome = solve(
        Objective::minimize(vec![1_f64]),
        vec![Constraint::less(vec![1_f64], 1_f64), Constraint::greater(vec![1_f64], 2_f64)],
    );

    assert_eq!(outcome, SolveOutcome::Infeasible);
}

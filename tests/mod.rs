//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use std::path::PathBuf;

use graphical_lp::algorithm::{Method, solve_program, SolveError, SolveOutcome};
use graphical_lp::config::{Config, PivotRuleKind};
use graphical_lp::data::linear_program::MalformedInput;
use graphical_lp::io::error::ImportError;
use graphical_lp::io::import;
use graphical_lp::io::json::RenderData;

fn problem_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "problems", name].iter().collect()
}

fn summary(name: &str) -> String {
    let program = import(&problem_path(name)).unwrap();
    solve_program(&program, &Config::default()).outcome.summary(2)
}

#[test]
fn textbook() {
    assert_eq!(summary("textbook.json"), "Optimal solution: (6.67, 6.67)\nOptimal value: 33.33");
}

#[test]
fn lower_bounds() {
    assert_eq!(summary("lower_bounds.json"), "Optimal solution: (2.00, 3.00)\nOptimal value: 5.00");
}

#[test]
fn exclusive() {
    assert_eq!(summary("exclusive.json"), "No feasible solution");
}

#[test]
fn unbounded() {
    assert_eq!(summary("unbounded.json"), "The objective is unbounded");
}

#[test]
fn inconsistent() {
    match import(&problem_path("inconsistent.json")) {
        Err(ImportError::LinearProgram(MalformedInput::DimensionMismatch { index, expected, found })) => {
            assert_eq!((index, expected, found), (0, 2, 3));
        },
        other => panic!("expected a dimension mismatch, got {:?}", other.map(|program| program.dimension())),
    }
}

#[test]
fn three_dimensional() {
    let program = import(&problem_path("diet.json")).unwrap();
    let report = solve_program(&program, &Config::default());

    match &report.outcome {
        SolveOutcome::Optimal { solution, method, .. } => {
            assert_eq!(*method, Method::VertexEnumeration);
            assert!((solution.objective_value() - 9_f64).abs() < 1e-9);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
    assert_eq!(report.outcome.summary(1), "Optimal solution: (3.0, 0.0, 3.0)\nOptimal value: 9.0");
}

#[test]
fn pivot_rules_agree() {
    let program = import(&problem_path("textbook.json")).unwrap();
    let most_negative = solve_program(&program, &Config::default());
    let first_profitable = solve_program(&program, &Config::default().with_pivot_rule(PivotRuleKind::FirstProfitable));

    let value = |outcome: &SolveOutcome<f64>| outcome.solution().map(|solution| solution.objective_value());
    let (left, right) = (value(&most_negative.outcome).unwrap(), value(&first_profitable.outcome).unwrap());
    assert!((left - right).abs() < 1e-9);
}

#[test]
fn iteration_limit() {
    let program = import(&problem_path("textbook.json")).unwrap();
    let report = solve_program(&program, &Config::default().with_max_iterations(1));

    assert_eq!(report.outcome, SolveOutcome::Error(SolveError::IterationLimitExceeded { limit: 1 }));
    assert_eq!(report.outcome.summary(2), "Error: no optimum found within 1 Simplex iterations");
}

#[test]
fn render_data() {
    let program = import(&problem_path("lower_bounds.json")).unwrap();
    let report = solve_program(&program, &Config::default());
    let data = RenderData::new(&program, &report.outcome, 2);

    assert_eq!(data.vertices, vec![vec![2_f64, 3_f64]]);
    assert_eq!(data.optimum.as_ref().map(|optimum| optimum.method), Some("vertex enumeration"));
    assert!(data.to_json().unwrap().contains("\"relation\": \">=\""));
}

#[test]
fn large_coordinates() {
    let program = import(&problem_path("large.json")).unwrap();
    let report = solve_program(&program, &Config::default());

    match &report.outcome {
        SolveOutcome::Optimal { solution, vertices, method } => {
            assert_eq!(*method, Method::VertexEnumeration);
            assert_eq!(vertices.len(), 2);
            assert_eq!(solution.point().coordinates(), &[2e17_f64]);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}

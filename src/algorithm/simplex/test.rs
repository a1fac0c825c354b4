use crate::algorithm::simplex::{OptimizationResult, SimplexEngine, solve, Step};
use crate::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, MostNegative};
use crate::algorithm::simplex::tableau::NotApplicable;
use crate::config::Config;
use crate::data::linear_program::elements::{Constraint, Objective};
use crate::data::linear_program::LinearProgram;

fn textbook() -> LinearProgram<f64> {
    LinearProgram::new(
        Objective::maximize(vec![3_f64, 2_f64]),
        vec![
            Constraint::less(vec![2_f64, 1_f64], 20_f64),
            Constraint::less(vec![1_f64, 2_f64], 20_f64),
            Constraint::greater(vec![1_f64, 0_f64], 0_f64),
            Constraint::greater(vec![0_f64, 1_f64], 0_f64),
        ],
    ).unwrap()
}

#[test]
fn simplex() {
    let run = solve::<_, MostNegative>(&textbook(), &Config::default()).unwrap();
    assert_eq!(run.iterations, 2);
    match run.result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_relative_eq!(solution.point().coordinates()[0], 20_f64 / 3_f64, epsilon = 1e-9);
            assert_relative_eq!(solution.point().coordinates()[1], 20_f64 / 3_f64, epsilon = 1e-9);
            assert_relative_eq!(solution.objective_value(), 100_f64 / 3_f64, epsilon = 1e-9);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
    assert!(run.tableaus.is_empty());
}

#[test]
fn first_profitable_agrees() {
    let config = Config::default();
    let most_negative = solve::<_, MostNegative>(&textbook(), &config).unwrap();
    let first_profitable = solve::<_, FirstProfitable>(&textbook(), &config).unwrap();
    match (most_negative.result, first_profitable.result) {
        (OptimizationResult::FiniteOptimum(left), OptimizationResult::FiniteOptimum(right)) => {
            assert_relative_eq!(left.objective_value(), right.objective_value(), epsilon = 1e-9);
        },
        other => panic!("expected two optima, got {:?}", other),
    }
}

#[test]
fn unbounded() {
    let program = LinearProgram::new(
        Objective::maximize(vec![1_f64, 1_f64]),
        vec![Constraint::less(vec![1_f64, 0_f64], 5_f64)],
    ).unwrap();
    let run = solve::<_, MostNegative>(&program, &Config::default()).unwrap();
    assert_eq!(run.result, OptimizationResult::Unbounded);
    assert_eq!(run.iterations, 1);
}

#[test]
fn no_constraints() {
    let program = LinearProgram::new(Objective::minimize(vec![1_f64, 2_f64]), vec![]).unwrap();
    let run = solve::<_, MostNegative>(&program, &Config::default()).unwrap();
    match run.result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert!(solution.point().is_origin(1e-9));
            assert_eq!(solution.objective_value(), 0_f64);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }

    let program = LinearProgram::new(Objective::maximize(vec![1_f64]), vec![]).unwrap();
    let run = solve::<_, MostNegative>(&program, &Config::default()).unwrap();
    assert_eq!(run.result, OptimizationResult::Unbounded);
}

#[test]
fn minimization() {
    // min x - 2y s.t. x + y <= 4, y <= 3
    let program = LinearProgram::new(
        Objective::minimize(vec![1_f64, -2_f64]),
        vec![
            Constraint::less(vec![1_f64, 1_f64], 4_f64),
            Constraint::less(vec![0_f64, 1_f64], 3_f64),
        ],
    ).unwrap();
    let run = solve::<_, MostNegative>(&program, &Config::default()).unwrap();
    match run.result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_abs_diff_eq!(solution.point().coordinates()[0], 0_f64);
            assert_abs_diff_eq!(solution.point().coordinates()[1], 3_f64);
            assert_abs_diff_eq!(solution.objective_value(), -6_f64);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}

#[test]
fn not_applicable() {
    let program = LinearProgram::new(
        Objective::minimize(vec![1_f64, 1_f64]),
        vec![
            Constraint::greater(vec![1_f64, 0_f64], 2_f64),
            Constraint::greater(vec![0_f64, 1_f64], 3_f64),
        ],
    ).unwrap();
    let result = solve::<_, MostNegative>(&program, &Config::default());
    assert_eq!(result.err(), Some(NotApplicable { constraint: 0 }));
}

#[test]
fn iteration_limit() {
    let config = Config::default().with_max_iterations(1);
    let run = solve::<_, MostNegative>(&textbook(), &config).unwrap();
    assert_eq!(run.result, OptimizationResult::IterationLimitExceeded { iterations: 1 });

    // Reaching optimality exactly at the limit is fine
    let config = Config::default().with_max_iterations(2);
    let run = solve::<_, MostNegative>(&textbook(), &config).unwrap();
    assert!(matches!(run.result, OptimizationResult::FiniteOptimum(_)));
}

#[test]
fn recording() {
    let config = Config::default().with_record_tableaus(true);
    let run = solve::<_, MostNegative>(&textbook(), &config).unwrap();
    assert_eq!(run.tableaus.len(), run.iterations + 1);
    assert!(!run.tableaus[0].is_optimal(1e-9));
    assert!(run.tableaus.last().unwrap().is_optimal(1e-9));

    let quiet = solve::<_, MostNegative>(&textbook(), &Config::default()).unwrap();
    assert_eq!(run.result, quiet.result);
}

#[test]
fn stepping() {
    let mut engine = SimplexEngine::<_, MostNegative>::new(&textbook(), &Config::default()).unwrap();
    assert_eq!(engine.step(), Step::Pivoted { row: 0, column: 0 });
    assert_eq!(engine.step(), Step::Pivoted { row: 1, column: 1 });
    assert_eq!(engine.step(), Step::Optimal);
    assert_eq!(engine.step(), Step::Optimal);
    assert_eq!(engine.iterations(), 2);
    assert!(engine.tableau().is_optimal(1e-9));
}

#[test]
fn degenerate() {
    // Two constraints meet the x axis in the same point
    let program = LinearProgram::new(
        Objective::maximize(vec![2_f64, 1_f64]),
        vec![
            Constraint::less(vec![1_f64, 1_f64], 4_f64),
            Constraint::less(vec![1_f64, 0_f64], 4_f64),
            Constraint::less(vec![1_f64, -1_f64], 4_f64),
        ],
    ).unwrap();
    let run = solve::<_, MostNegative>(&program, &Config::default()).unwrap();
    match run.result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_abs_diff_eq!(solution.point().coordinates()[0], 4_f64);
            assert_abs_diff_eq!(solution.point().coordinates()[1], 0_f64);
            assert_abs_diff_eq!(solution.objective_value(), 8_f64);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}

#[test]
fn single_precision() {
    let program = LinearProgram::new(
        Objective::maximize(vec![3_f32, 2_f32]),
        vec![
            Constraint::less(vec![2_f32, 1_f32], 20_f32),
            Constraint::less(vec![1_f32, 2_f32], 20_f32),
        ],
    ).unwrap();
    let config = Config::default().with_epsilon(1e-5);
    let run = solve::<_, MostNegative>(&program, &config).unwrap();
    match run.result {
        OptimizationResult::FiniteOptimum(solution) => {
            assert_relative_eq!(solution.objective_value(), 100_f32 / 3_f32, epsilon = 1e-4);
        },
        other => panic!("expected an optimum, got {:?}", other),
    }
}

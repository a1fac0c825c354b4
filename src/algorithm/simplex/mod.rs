//! # The Simplex algorithm
//!
//! The primal Simplex method on a dense tableau, starting from the basis of slack variables at the
//! origin. The engine moves through three states: it is built from a problem, pivots while some
//! column can still improve the objective, and ends when the tableau is optimal (or the problem
//! turns out to be unbounded).
//!
//! There is no artificial phase: problems of which the origin is not feasible are rejected while
//! building, see `NotApplicable`.
use tracing::{debug, trace, warn};

use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::{debug_assert_in_basic_feasible_solution_state, NotApplicable, Tableau};
use crate::config::Config;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Real;

pub mod strategy;
pub mod tableau;

/// The result of running the Simplex method to a terminal state.
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    /// The tableau is optimal.
    FiniteOptimum(Solution<F>),
    /// The ratio test found no row to pivot on.
    Unbounded,
    /// Optimality was not reached within the configured number of pivots.
    IterationLimitExceeded {
        /// Number of pivots that were performed.
        iterations: usize,
    },
}

/// What a single step of the engine did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    /// A pivot was performed on this element.
    Pivoted {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        column: usize,
    },
    /// No column has a negative relative cost.
    Optimal,
    /// The column has a negative relative cost, but no positive entry.
    Unbounded {
        #[allow(missing_docs)]
        column: usize,
    },
}

/// Everything that a completed run produced.
#[derive(Clone, Debug)]
pub struct SimplexRun<F> {
    #[allow(missing_docs)]
    pub result: OptimizationResult<F>,
    /// Number of pivots performed.
    pub iterations: usize,
    /// The initial tableau and the tableau after every pivot, if recording was enabled.
    pub tableaus: Vec<Tableau<F>>,
}

/// Pivoting state machine over a `Tableau`.
///
/// The tableau is owned exclusively by the engine for the duration of a solve.
pub struct SimplexEngine<F, PR> {
    tableau: Tableau<F>,
    rule: PR,
    epsilon: F,
    iterations: usize,
    max_iterations: usize,
    /// Snapshots, only when recording. Observational only.
    history: Option<Vec<Tableau<F>>>,
    /// Set once a terminal step has been reached.
    finished: Option<Step>,
}

impl<F: Real, PR: PivotRule> SimplexEngine<F, PR> {
    /// Build the initial tableau.
    ///
    /// # Errors
    ///
    /// `NotApplicable` if the origin is not feasible for the problem.
    pub fn new(program: &LinearProgram<F>, config: &Config) -> Result<Self, NotApplicable> {
        let epsilon = F::from_config(config.epsilon);
        let tableau = Tableau::new(program, epsilon)?;
        let history = config.record_tableaus.then(|| vec![tableau.clone()]);

        Ok(Self {
            tableau,
            rule: PR::new(),
            epsilon,
            iterations: 0,
            max_iterations: config.max_iterations,
            history,
            finished: None,
        })
    }

    /// Current tableau.
    pub fn tableau(&self) -> &Tableau<F> {
        &self.tableau
    }

    /// Number of pivots performed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Perform a single pivot, if the tableau is not yet in a terminal state.
    ///
    /// Once a terminal step (`Optimal` or `Unbounded`) has been returned, it is returned again on
    /// every subsequent call without modifying the tableau.
    pub fn step(&mut self) -> Step {
        if let Some(step) = self.finished {
            return step;
        }
        if cfg!(debug_assertions) {
            debug_assert_in_basic_feasible_solution_state(&self.tableau, self.epsilon);
        }

        let step = match self.rule.select_primal_pivot_column(&self.tableau, self.epsilon) {
            Some(column) => match self.tableau.select_primal_pivot_row(column, self.epsilon) {
                Some(row) => {
                    self.tableau.bring_into_basis(row, column);
                    self.iterations += 1;
                    debug!(
                        iteration = self.iterations, row, column,
                        objective = %self.tableau.objective_function_value(),
                        "pivoted"
                    );
                    trace!("\n{}", self.tableau);
                    if let Some(history) = &mut self.history {
                        history.push(self.tableau.clone());
                    }
                    Step::Pivoted { row, column }
                },
                None => Step::Unbounded { column },
            },
            None => Step::Optimal,
        };

        if !matches!(step, Step::Pivoted { .. }) {
            self.finished = Some(step);
        }
        step
    }

    /// Pivot until a terminal state or the iteration limit is reached.
    pub fn run(mut self) -> SimplexRun<F> {
        let result = loop {
            if self.iterations >= self.max_iterations && !self.tableau.is_optimal(self.epsilon) {
                warn!(iterations = self.iterations, "iteration limit reached before optimality");
                break OptimizationResult::IterationLimitExceeded { iterations: self.iterations };
            }

            match self.step() {
                Step::Pivoted { .. } => {},
                Step::Optimal => break OptimizationResult::FiniteOptimum(self.tableau.current_solution()),
                Step::Unbounded { column } => {
                    debug!(column, "no row to pivot on, the problem is unbounded");
                    break OptimizationResult::Unbounded;
                },
            }
        };

        SimplexRun {
            result,
            iterations: self.iterations,
            tableaus: self.history.unwrap_or_default(),
        }
    }
}

/// Solve a problem with the Simplex method, using a given pivot rule.
///
/// # Errors
///
/// `NotApplicable` if the origin is not feasible for the problem.
pub fn solve<F: Real, PR: PivotRule>(
    program: &LinearProgram<F>,
    config: &Config,
) -> Result<SimplexRun<F>, NotApplicable> {
    SimplexEngine::<F, PR>::new(program, config).map(SimplexEngine::run)
}

#[cfg(test)]
mod test;

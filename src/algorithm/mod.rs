//! # Algorithms
//!
//! Two methods solve the same problem here. The Simplex method pivots directly to an optimal
//! vertex, but only when the origin is feasible. The graphical method enumerates all vertices,
//! which is needed for drawing the feasible region anyway, and serves as a fallback.
//!
//! The functions in this module run both and decide which answer to report.
use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::algorithm::graphical::{enumerate_feasible_vertices, FeasibleVertexSet};
use crate::algorithm::graphical::recession::{Boundedness, boundedness};
use crate::algorithm::simplex::{OptimizationResult, SimplexRun};
use crate::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, MostNegative};
use crate::algorithm::simplex::tableau::{NotApplicable, Tableau};
use crate::config::{Config, PivotRuleKind};
use crate::data::linear_program::{LinearProgram, MalformedInput};
use crate::data::linear_program::elements::{Constraint, Objective};
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::traits::Real;

pub mod graphical;
pub mod simplex;

/// The method that provided the reported optimum.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Method {
    #[allow(missing_docs)]
    Simplex,
    /// Best vertex found by the graphical method.
    VertexEnumeration,
}

/// Reasons for which no answer could be given.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The problem description is inconsistent.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),
    /// The Simplex method didn't reach an optimum within the configured number of pivots.
    #[error("no optimum found within {limit} Simplex iterations")]
    IterationLimitExceeded {
        /// The configured maximum.
        limit: usize,
    },
    /// A feasible vertex exists, but it could not be decided whether it is optimal.
    #[error("could not decide whether the objective is bounded")]
    BoundednessUndetermined,
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveOutcome<F> {
    /// A finite optimum, with the vertices of the feasible region.
    Optimal {
        #[allow(missing_docs)]
        solution: Solution<F>,
        #[allow(missing_docs)]
        vertices: FeasibleVertexSet<F>,
        #[allow(missing_docs)]
        method: Method,
    },
    /// No point satisfies all constraints.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
    #[allow(missing_docs)]
    Error(SolveError),
}

impl<F: Real> SolveOutcome<F> {
    /// The optimal solution, if there is one.
    pub fn solution(&self) -> Option<&Solution<F>> {
        match self {
            SolveOutcome::Optimal { solution, .. } => Some(solution),
            _ => None,
        }
    }

    /// Human readable summary, with values rounded to `decimals` decimals.
    pub fn summary(&self, decimals: usize) -> String {
        format!("{:.*}", decimals, self)
    }
}

impl<F: Real> fmt::Display for SolveOutcome<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolveOutcome::Optimal { solution, .. } => match f.precision() {
                Some(precision) => write!(f, "{:.*}", precision, solution),
                None => write!(f, "{}", solution),
            },
            SolveOutcome::Infeasible => f.write_str("No feasible solution"),
            SolveOutcome::Unbounded => f.write_str("The objective is unbounded"),
            SolveOutcome::Error(error) => write!(f, "Error: {}", error),
        }
    }
}

/// The outcome of a solve, with everything that was computed along the way.
#[derive(Clone, Debug)]
pub struct SolveReport<F> {
    #[allow(missing_docs)]
    pub outcome: SolveOutcome<F>,
    /// Number of Simplex pivots, `None` if the Simplex method was not applicable.
    pub iterations: Option<usize>,
    /// Intermediate Simplex tableaus, if recording was enabled.
    pub tableaus: Vec<Tableau<F>>,
}

/// Solve a linear program with the default configuration.
///
/// The Simplex method starts at the origin and takes the decision variables to be nonnegative.
/// The graphical method, which supplies the answer whenever the origin is not feasible, uses only
/// the listed constraints. List `x >= 0` explicitly for answers that don't depend on which method
/// applies.
///
/// # Arguments
///
/// * `objective`: Function to optimize.
/// * `constraints`: Inequalities in the same number of variables as the objective.
///
/// # Return value
///
/// The outcome; errors are values of the outcome as well.
pub fn solve<F: Real>(objective: Objective<F>, constraints: Vec<Constraint<F>>) -> SolveOutcome<F> {
    solve_with_config(objective, constraints, &Config::default()).outcome
}

/// Solve a linear program, and report on the process.
pub fn solve_with_config<F: Real>(
    objective: Objective<F>,
    constraints: Vec<Constraint<F>>,
    config: &Config,
) -> SolveReport<F> {
    match LinearProgram::new(objective, constraints) {
        Ok(program) => solve_program(&program, config),
        Err(error) => SolveReport {
            outcome: SolveOutcome::Error(error.into()),
            iterations: None,
            tableaus: Vec::new(),
        },
    }
}

/// Solve a validated linear program.
///
/// Runs the Simplex method and the graphical method, and reconciles their answers. See `solve` for
/// how the methods treat the sign of the decision variables.
pub fn solve_program<F: Real>(program: &LinearProgram<F>, config: &Config) -> SolveReport<F> {
    let epsilon = F::from_config(config.epsilon);
    let vertices = enumerate_feasible_vertices(program.constraints(), program.dimension(), config);

    let simplex: Result<SimplexRun<F>, NotApplicable> = match config.pivot_rule {
        PivotRuleKind::MostNegative => simplex::solve::<_, MostNegative>(program, config),
        PivotRuleKind::FirstProfitable => simplex::solve::<_, FirstProfitable>(program, config),
    };

    match simplex {
        Ok(SimplexRun { result, iterations, tableaus }) => {
            let outcome = match result {
                OptimizationResult::FiniteOptimum(solution) => reconcile(program, solution, vertices, epsilon),
                OptimizationResult::Unbounded => {
                    info!("simplex method found the problem to be unbounded");
                    SolveOutcome::Unbounded
                },
                OptimizationResult::IterationLimitExceeded { .. } => {
                    SolveOutcome::Error(SolveError::IterationLimitExceeded { limit: config.max_iterations })
                },
            };

            SolveReport { outcome, iterations: Some(iterations), tableaus }
        },
        Err(reason) => {
            info!(%reason, "simplex method not applicable, using the graphical method");
            SolveReport {
                outcome: fall_back(program, vertices, config, epsilon),
                iterations: None,
                tableaus: Vec::new(),
            }
        },
    }
}

/// Choose between a Simplex optimum and the best vertex.
///
/// The Simplex answer is kept, unless it is the origin and a vertex away from the origin is
/// strictly better.
fn reconcile<F: Real>(
    program: &LinearProgram<F>,
    solution: Solution<F>,
    vertices: FeasibleVertexSet<F>,
    epsilon: F,
) -> SolveOutcome<F> {
    if solution.point().is_origin(epsilon) {
        if let Some(best) = vertices.best(program.objective(), epsilon) {
            let sense = program.objective().sense();
            if !best.point().is_origin(epsilon)
                && sense.is_improvement(best.objective_value(), solution.objective_value(), epsilon) {
                warn!(
                    simplex = %solution.objective_value(),
                    vertex = %best.objective_value(),
                    "simplex optimum is the origin, but a vertex is better; reporting the vertex"
                );
                return SolveOutcome::Optimal { solution: best, vertices, method: Method::VertexEnumeration };
            }
        }
    }

    info!(value = %solution.objective_value(), "optimum found by the simplex method");
    SolveOutcome::Optimal { solution, vertices, method: Method::Simplex }
}

/// Answer with the graphical method alone.
fn fall_back<F: Real>(
    program: &LinearProgram<F>,
    vertices: FeasibleVertexSet<F>,
    config: &Config,
    epsilon: F,
) -> SolveOutcome<F> {
    let Some(best) = vertices.best(program.objective(), epsilon) else {
        info!("no feasible vertex");
        return SolveOutcome::Infeasible;
    };

    match boundedness(program, config) {
        Boundedness::Bounded => {
            info!(value = %best.objective_value(), "optimum found by the graphical method");
            SolveOutcome::Optimal { solution: best, vertices, method: Method::VertexEnumeration }
        },
        Boundedness::Unbounded => SolveOutcome::Unbounded,
        Boundedness::IterationLimitExceeded => {
            warn!("iteration limit reached while deciding whether the objective is bounded");
            SolveOutcome::Error(SolveError::IterationLimitExceeded { limit: config.max_iterations })
        },
        Boundedness::Undetermined => {
            warn!("could not decide whether the objective is bounded");
            SolveOutcome::Error(SolveError::BoundednessUndetermined)
        },
    }
}

//! # Boundedness of the objective
//!
//! The best vertex is only optimal if the objective can't be improved indefinitely. That is the
//! case when no direction `d` exists with `A d <= 0` (for all constraints rewritten as
//! `A x <= b`) along which the objective improves.
//!
//! Searching for such a direction is itself a linear program, and one that the Simplex method of
//! this crate can solve directly: the origin is feasible for it. Each free direction coordinate is
//! split into a nonnegative and a nonpositive part, and every part is bounded by one, such that
//! the optimum is finite.
use tracing::debug;

use crate::algorithm::simplex::{OptimizationResult, solve};
use crate::algorithm::simplex::strategy::pivot_rule::MostNegative;
use crate::config::Config;
use crate::data::linear_program::elements::{Constraint, Objective};
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::traits::Real;

/// Whether the objective function is bounded on the feasible region.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Boundedness {
    /// No improving direction exists.
    Bounded,
    /// Following some direction, the objective improves without limit.
    Unbounded,
    /// The direction search did not finish within the iteration limit.
    IterationLimitExceeded,
    /// The direction search could not be set up or started.
    Undetermined,
}

/// Determine whether the objective is bounded on a nonempty feasible region.
///
/// # Arguments
///
/// * `program`: A problem with at least one feasible point.
/// * `config`: Tolerance and iteration limit for the direction search.
pub fn boundedness<F: Real>(program: &LinearProgram<F>, config: &Config) -> Boundedness {
    let Ok(search) = direction_search(program) else {
        return Boundedness::Undetermined;
    };

    match solve::<_, MostNegative>(&search, config) {
        Ok(run) => match run.result {
            OptimizationResult::FiniteOptimum(solution) => {
                debug!(improvement = %solution.objective_value(), "searched for an improving direction");
                if solution.objective_value().is_negligible(F::from_config(config.epsilon)) {
                    Boundedness::Bounded
                } else {
                    Boundedness::Unbounded
                }
            },
            // The search region is a box, so this doesn't happen
            OptimizationResult::Unbounded => Boundedness::Unbounded,
            OptimizationResult::IterationLimitExceeded { .. } => Boundedness::IterationLimitExceeded,
        },
        Err(_) => Boundedness::Undetermined,
    }
}

/// The linear program of which the optimum is an improving direction, if one exists.
///
/// Variables `0..n` are the positive parts of the direction, variables `n..2n` the negative parts.
fn direction_search<F: Real>(
    program: &LinearProgram<F>,
) -> Result<LinearProgram<F>, crate::data::linear_program::MalformedInput> {
    let n = program.dimension();
    let split = |coefficients: &[F]| {
        coefficients.iter().copied()
            .chain(coefficients.iter().map(|&c| -c))
            .collect::<Vec<_>>()
    };

    let objective = Objective::new(
        split(program.objective().coefficients()),
        program.objective().sense(),
    );
    let cone = program.constraints().iter()
        .map(|constraint| {
            let (coefficients, _) = constraint.normalized();
            Constraint::less(split(&coefficients), F::zero())
        });
    let unit_box = (0..(2 * n))
        .map(|j| {
            let mut coefficients = vec![F::zero(); 2 * n];
            coefficients[j] = F::one();
            Constraint::less(coefficients, F::one())
        });

    LinearProgram::new(objective, cone.chain(unit_box).collect())
}

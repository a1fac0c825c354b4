//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Not;

use crate::data::linear_algebra::inner_product;
use crate::data::number_types::traits::Real;

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Sense {
    Maximize,
    Minimize,
}

impl Sense {
    /// Whether `candidate` is a strictly better objective value than `incumbent`.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: Margin by which the candidate should be better.
    pub fn is_improvement<F: Real>(self, candidate: F, incumbent: F, epsilon: F) -> bool {
        match self {
            Sense::Maximize => candidate > incumbent + epsilon,
            Sense::Minimize => candidate < incumbent - epsilon,
        }
    }
}

impl Not for Sense {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Sense::Maximize => Sense::Minimize,
            Sense::Minimize => Sense::Maximize,
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Sense::Maximize => "max",
            Sense::Minimize => "min",
        })
    }
}

/// A `Relation` is a type of inequality.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Relation {
    /// `a x <= b`
    Less,
    /// `a x >= b`
    Greater,
}

impl Not for Relation {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Relation::Less => Relation::Greater,
            Relation::Greater => Relation::Less,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Relation::Less => "<=",
            Relation::Greater => ">=",
        })
    }
}

/// Linear function to optimize.
#[derive(Clone, Debug, PartialEq)]
pub struct Objective<F> {
    coefficients: Vec<F>,
    sense: Sense,
}

impl<F: Real> Objective<F> {
    /// Create a new objective function.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: One coefficient per decision variable.
    /// * `sense`: Whether to maximize or minimize.
    pub fn new(coefficients: Vec<F>, sense: Sense) -> Self {
        Self { coefficients, sense }
    }

    /// Shorthand for a maximization objective.
    pub fn maximize(coefficients: Vec<F>) -> Self {
        Self::new(coefficients, Sense::Maximize)
    }

    /// Shorthand for a minimization objective.
    pub fn minimize(coefficients: Vec<F>) -> Self {
        Self::new(coefficients, Sense::Minimize)
    }

    #[allow(missing_docs)]
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    #[allow(missing_docs)]
    pub fn sense(&self) -> Sense {
        self.sense
    }

    /// Number of decision variables.
    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    /// Value of the objective function at a point.
    pub fn evaluate(&self, point: &[F]) -> F {
        inner_product(&self.coefficients, point)
    }
}

impl<F: Real> fmt::Display for Objective<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.sense)?;
        write_linear_expression(f, &self.coefficients)
    }
}

/// A single linear inequality `a x <= b` or `a x >= b`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F> {
    coefficients: Vec<F>,
    relation: Relation,
    bound: F,
}

impl<F: Real> Constraint<F> {
    /// Create a new constraint.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: One coefficient per decision variable.
    /// * `relation`: Type of inequality.
    /// * `bound`: Right hand side.
    pub fn new(coefficients: Vec<F>, relation: Relation, bound: F) -> Self {
        Self { coefficients, relation, bound }
    }

    /// Shorthand for `a x <= b`.
    pub fn less(coefficients: Vec<F>, bound: F) -> Self {
        Self::new(coefficients, Relation::Less, bound)
    }

    /// Shorthand for `a x >= b`.
    pub fn greater(coefficients: Vec<F>, bound: F) -> Self {
        Self::new(coefficients, Relation::Greater, bound)
    }

    #[allow(missing_docs)]
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    #[allow(missing_docs)]
    pub fn relation(&self) -> Relation {
        self.relation
    }

    #[allow(missing_docs)]
    pub fn bound(&self) -> F {
        self.bound
    }

    /// Number of decision variables this constraint is expressed in.
    pub fn dimension(&self) -> usize {
        self.coefficients.len()
    }

    /// Left hand side `a x` evaluated at a point.
    pub fn lhs(&self, point: &[F]) -> F {
        inner_product(&self.coefficients, point)
    }

    /// Whether a point satisfies this constraint.
    ///
    /// # Arguments
    ///
    /// * `point`: Coordinates, as many as this constraint has coefficients.
    /// * `epsilon`: The constraint may be violated by at most this amount.
    pub fn is_satisfied_by(&self, point: &[F], epsilon: F) -> bool {
        let lhs = self.lhs(point);
        match self.relation {
            Relation::Less => lhs <= self.bound + epsilon,
            Relation::Greater => lhs >= self.bound - epsilon,
        }
    }

    /// This constraint rewritten as `a x <= b`.
    ///
    /// # Return value
    ///
    /// The coefficients and right hand side, both negated if this was a `>=` constraint.
    pub fn normalized(&self) -> (Vec<F>, F) {
        match self.relation {
            Relation::Less => (self.coefficients.clone(), self.bound),
            Relation::Greater => (self.coefficients.iter().map(|&c| -c).collect(), -self.bound),
        }
    }
}

impl<F: Real> fmt::Display for Constraint<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_linear_expression(f, &self.coefficients)?;
        write!(f, " {} {}", self.relation, self.bound)
    }
}

/// Write `c1 x1 + c2 x2 - c3 x3`, skipping zero coefficients.
fn write_linear_expression<F: Real>(f: &mut fmt::Formatter, coefficients: &[F]) -> fmt::Result {
    let mut written = false;
    for (j, &coefficient) in coefficients.iter().enumerate() {
        if coefficient.is_zero() {
            continue;
        }
        match (written, coefficient < F::zero()) {
            (false, _) => write!(f, "{} x{}", coefficient, j + 1)?,
            (true, false) => write!(f, " + {} x{}", coefficient, j + 1)?,
            (true, true) => write!(f, " - {} x{}", -coefficient, j + 1)?,
        }
        written = true;
    }

    if written { Ok(()) } else { f.write_str("0") }
}

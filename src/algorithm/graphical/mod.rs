//! # The graphical method
//!
//! Each vertex of the feasible region lies on the boundary of `n` linearly independent constraints
//! in dimension `n`. Intersecting every combination of `n` constraints and keeping the intersections
//! that satisfy all constraints hence yields all vertices. The number of combinations grows as
//! `m choose n`, which limits this method to small problems.
use std::collections::HashSet;
use std::fmt;

use enum_map::{Enum, EnumMap};
use itertools::Itertools;
use tracing::debug;

use crate::config::Config;
use crate::data::linear_algebra::system::solve_square_system;
use crate::data::linear_program::elements::{Constraint, Objective};
use crate::data::linear_program::feasibility::is_feasible;
use crate::data::linear_program::solution::{Point, Solution};
use crate::data::number_types::traits::Real;

pub mod recession;

/// What happened to the intersection of a combination of constraints.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Candidate {
    /// A new vertex.
    Feasible,
    /// The boundaries don't intersect in a single point.
    Singular,
    /// The intersection violates some constraint.
    Infeasible,
    /// The intersection equals an earlier vertex after rounding.
    Duplicate,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Candidate::Feasible => "feasible",
            Candidate::Singular => "singular",
            Candidate::Infeasible => "infeasible",
            Candidate::Duplicate => "duplicate",
        })
    }
}

/// The vertices of a feasible region.
///
/// Vertices are kept in the order in which they were found, and no two of them are equal after
/// rounding to the configured number of decimals. The coordinates themselves are not rounded, so
/// every vertex passes the feasibility test.
#[derive(Clone, Debug, PartialEq)]
pub struct FeasibleVertexSet<F> {
    vertices: Vec<Point<F>>,
    tally: EnumMap<Candidate, usize>,
}

impl<F: Real> FeasibleVertexSet<F> {
    /// A set without vertices.
    pub fn empty() -> Self {
        Self { vertices: Vec::new(), tally: EnumMap::default() }
    }

    #[allow(missing_docs)]
    pub fn vertices(&self) -> &[Point<F>] {
        &self.vertices
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[allow(missing_docs)]
    pub fn iter(&self) -> impl Iterator<Item = &Point<F>> {
        self.vertices.iter()
    }

    /// How many constraint combinations ended up in which way.
    pub fn tally(&self) -> &EnumMap<Candidate, usize> {
        &self.tally
    }

    /// The vertex with the best objective value.
    ///
    /// # Arguments
    ///
    /// * `objective`: Function to evaluate the vertices with.
    /// * `epsilon`: A later vertex needs to be better by more than this to replace an earlier one.
    ///
    /// # Return value
    ///
    /// `None` if there are no vertices.
    pub fn best(&self, objective: &Objective<F>, epsilon: F) -> Option<Solution<F>> {
        let mut best: Option<(&Point<F>, F)> = None;
        for vertex in &self.vertices {
            let value = objective.evaluate(vertex.coordinates());
            match best {
                Some((_, incumbent)) if !objective.sense().is_improvement(value, incumbent, epsilon) => {},
                _ => best = Some((vertex, value)),
            }
        }

        best.map(|(vertex, value)| Solution::new(vertex.clone(), value))
    }

    /// Vertices of a two dimensional region in the order of its boundary.
    ///
    /// Sorted by angle around the centroid of the vertices, counterclockwise starting from the
    /// negative x axis.
    ///
    /// # Return value
    ///
    /// `None` if the vertices are not two dimensional.
    pub fn polygon_order(&self) -> Option<Vec<Point<F>>> {
        if self.vertices.iter().any(|vertex| vertex.dimension() != 2) {
            return None;
        }
        if self.vertices.is_empty() {
            return Some(Vec::new());
        }

        let count = F::from_usize(self.vertices.len())?;
        let (sum_x, sum_y) = self.vertices.iter()
            .fold((F::zero(), F::zero()), |(x, y), vertex| {
                (x + vertex.coordinates()[0], y + vertex.coordinates()[1])
            });
        let (center_x, center_y) = (sum_x / count, sum_y / count);

        let angle = |vertex: &Point<F>| {
            (vertex.coordinates()[1] - center_y).atan2(vertex.coordinates()[0] - center_x)
        };
        let mut ordered = self.vertices.clone();
        ordered.sort_by(|left, right| angle(left).partial_cmp(&angle(right))
            .unwrap_or(std::cmp::Ordering::Equal));

        Some(ordered)
    }
}

impl<'a, F> IntoIterator for &'a FeasibleVertexSet<F> {
    type Item = &'a Point<F>;
    type IntoIter = std::slice::Iter<'a, Point<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Compute all vertices of the feasible region.
///
/// # Arguments
///
/// * `constraints`: All constraints of the problem, each with `dimension` coefficients.
/// * `dimension`: Number of decision variables.
/// * `config`: Provides the feasibility tolerance and the rounding precision for deduplication.
///
/// # Return value
///
/// The vertices, possibly none, in which case the region has no vertex (it is empty, or it
/// contains a line).
pub fn enumerate_feasible_vertices<F: Real>(
    constraints: &[Constraint<F>],
    dimension: usize,
    config: &Config,
) -> FeasibleVertexSet<F> {
    debug_assert!(constraints.iter().all(|constraint| constraint.dimension() == dimension));

    let mut set = FeasibleVertexSet::empty();
    if dimension == 0 {
        return set;
    }

    let epsilon = F::from_config(config.epsilon);
    let mut seen = HashSet::new();
    for combination in constraints.iter().combinations(dimension) {
        let matrix = combination.iter()
            .map(|constraint| constraint.coefficients().to_vec())
            .collect::<Vec<_>>();
        let rhs = combination.iter().map(|constraint| constraint.bound()).collect::<Vec<_>>();

        let candidate = match solve_square_system(&matrix, &rhs, epsilon) {
            Err(_) => Candidate::Singular,
            Ok(coordinates) => {
                if !is_feasible(&coordinates, constraints, epsilon) {
                    Candidate::Infeasible
                } else {
                    let vertex = Point::new(coordinates);
                    if seen.insert(vertex.rounded_key(config.dedup_decimals)) {
                        set.vertices.push(vertex);
                        Candidate::Feasible
                    } else {
                        Candidate::Duplicate
                    }
                }
            },
        };
        set.tally[candidate] += 1;
    }

    debug!(
        feasible = set.tally[Candidate::Feasible],
        singular = set.tally[Candidate::Singular],
        infeasible = set.tally[Candidate::Infeasible],
        duplicate = set.tally[Candidate::Duplicate],
        "enumerated constraint combinations"
    );

    set
}

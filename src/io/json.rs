//! # JSON problem descriptions
//!
//! Problems arrive as JSON documents, typically produced by a front end that turns a problem
//! statement into numbers:
//!
//! ```json
//! {
//!     "objective": { "coefficients": [3, 2], "sense": "max" },
//!     "constraints": [
//!         { "coefficients": [2, 1], "relation": "<=", "bound": 20 },
//!         { "coefficients": [1, 0], "relation": ">=", "bound": 0 }
//!     ]
//! }
//! ```
//!
//! The shorter field names of earlier front ends (`objetivo`, `coeff`, `type`, `restricciones`,
//! `a`, `c`, `inecuacion`) are accepted as well.
//!
//! In the other direction, `RenderData` bundles what a plotting front end needs to draw a solved
//! problem.
use serde::{Deserialize, Serialize};

use crate::algorithm::{Method, SolveOutcome};
use crate::data::linear_program::{LinearProgram, MalformedInput};
use crate::data::linear_program::elements::{Constraint, Objective, Relation, Sense};
use crate::io::error::ImportError;

/// Problem as it is written in a file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProblemDescription {
    #[allow(missing_docs)]
    #[serde(alias = "objetivo")]
    pub objective: ObjectiveDescription,
    #[allow(missing_docs)]
    #[serde(alias = "restricciones", default)]
    pub constraints: Vec<ConstraintDescription>,
}

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ObjectiveDescription {
    #[serde(alias = "coeff")]
    pub coefficients: Vec<f64>,
    #[serde(alias = "type", default)]
    pub sense: SenseDescription,
}

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SenseDescription {
    #[default]
    #[serde(rename = "max", alias = "maximize", alias = "MAXIMIZE")]
    Max,
    #[serde(rename = "min", alias = "minimize", alias = "MINIMIZE")]
    Min,
}

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConstraintDescription {
    #[serde(alias = "a")]
    pub coefficients: Vec<f64>,
    #[serde(alias = "inecuacion", alias = "inequality")]
    pub relation: RelationDescription,
    #[serde(alias = "c")]
    pub bound: f64,
}

#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum RelationDescription {
    #[serde(rename = "<=", alias = "LE")]
    Less,
    #[serde(rename = ">=", alias = "GE")]
    Greater,
}

impl From<SenseDescription> for Sense {
    fn from(sense: SenseDescription) -> Self {
        match sense {
            SenseDescription::Max => Sense::Maximize,
            SenseDescription::Min => Sense::Minimize,
        }
    }
}

impl From<RelationDescription> for Relation {
    fn from(relation: RelationDescription) -> Self {
        match relation {
            RelationDescription::Less => Relation::Less,
            RelationDescription::Greater => Relation::Greater,
        }
    }
}

impl From<Relation> for RelationDescription {
    fn from(relation: Relation) -> Self {
        match relation {
            Relation::Less => RelationDescription::Less,
            Relation::Greater => RelationDescription::Greater,
        }
    }
}

impl From<&Constraint<f64>> for ConstraintDescription {
    fn from(constraint: &Constraint<f64>) -> Self {
        Self {
            coefficients: constraint.coefficients().to_vec(),
            relation: constraint.relation().into(),
            bound: constraint.bound(),
        }
    }
}

impl TryFrom<ProblemDescription> for LinearProgram<f64> {
    type Error = MalformedInput;

    fn try_from(description: ProblemDescription) -> Result<Self, Self::Error> {
        let objective = Objective::new(description.objective.coefficients, description.objective.sense.into());
        let constraints = description.constraints.into_iter()
            .map(|constraint| Constraint::new(constraint.coefficients, constraint.relation.into(), constraint.bound))
            .collect();

        LinearProgram::new(objective, constraints)
    }
}

/// Parse and validate a JSON problem description.
///
/// # Errors
///
/// If the text is not a problem description, or the problem is inconsistent.
pub fn parse(text: &str) -> Result<LinearProgram<f64>, ImportError> {
    let description: ProblemDescription = serde_json::from_str(text)?;
    Ok(description.try_into()?)
}

/// Everything a plotting front end needs to draw a solved problem.
///
/// The front end draws the constraint boundaries, fills the region spanned by the vertices and
/// marks the optimum.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RenderData {
    /// Number of decision variables.
    pub dimension: usize,
    #[allow(missing_docs)]
    pub constraints: Vec<ConstraintDescription>,
    /// Vertices of the feasible region, along its boundary for two dimensional problems.
    pub vertices: Vec<Vec<f64>>,
    /// Absent when there is no finite optimum.
    pub optimum: Option<OptimumDescription>,
    /// Human readable summary of the outcome.
    pub summary: String,
}

#[allow(missing_docs)]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OptimumDescription {
    pub point: Vec<f64>,
    pub value: f64,
    pub method: &'static str,
}

impl RenderData {
    /// Collect the data to render.
    ///
    /// # Arguments
    ///
    /// * `program`: The problem that was solved.
    /// * `outcome`: What solving it resulted in.
    /// * `decimals`: Precision of the summary.
    pub fn new(program: &LinearProgram<f64>, outcome: &SolveOutcome<f64>, decimals: usize) -> Self {
        let (vertices, optimum) = match outcome {
            SolveOutcome::Optimal { solution, vertices, method } => {
                let ordered = vertices.polygon_order()
                    .unwrap_or_else(|| vertices.vertices().to_vec());
                let optimum = OptimumDescription {
                    point: solution.point().coordinates().to_vec(),
                    value: solution.objective_value(),
                    method: match method {
                        Method::Simplex => "simplex",
                        Method::VertexEnumeration => "vertex enumeration",
                    },
                };
                (ordered.into_iter().map(|vertex| vertex.coordinates().to_vec()).collect(), Some(optimum))
            },
            _ => (Vec::new(), None),
        };

        Self {
            dimension: program.dimension(),
            constraints: program.constraints().iter().map(ConstraintDescription::from).collect(),
            vertices,
            optimum,
            summary: outcome.summary(decimals),
        }
    }

    /// Serialize as pretty printed JSON.
    ///
    /// # Errors
    ///
    /// Only if a number can't be represented in JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

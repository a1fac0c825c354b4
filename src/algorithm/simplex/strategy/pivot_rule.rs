//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::Real;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the
/// minimum ratio test of the tableau, independent of the rule.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Current tableau.
    /// * `epsilon`: Relative costs need to be below `-epsilon` to be considered negative.
    ///
    /// # Return value
    ///
    /// The index of a column with a negative relative cost, or `None` when the tableau is optimal.
    fn select_primal_pivot_column<F: Real>(&mut self, tableau: &Tableau<F>, epsilon: F) -> Option<usize>;
}

/// Pivot on the column with the most negative relative cost.
///
/// Ties are broken by the lowest column index. There is no anti cycling mechanism, so degenerate
/// problems might make this rule loop; the engine's iteration limit catches that.
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Real>(&mut self, tableau: &Tableau<F>, epsilon: F) -> Option<usize> {
        let mut most_negative: Option<(usize, F)> = None;
        for column in 0..tableau.nr_columns() {
            let cost = tableau.relative_cost(column);
            if cost < -epsilon {
                match most_negative {
                    Some((_, lowest)) if cost >= lowest => {},
                    _ => most_negative = Some((column, cost)),
                }
            }
        }

        most_negative.map(|(column, _)| column)
    }
}

/// Simply pivot on the first column which has a negative relative cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Real>(&mut self, tableau: &Tableau<F>, epsilon: F) -> Option<usize> {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.relative_cost(column) < -epsilon)
    }
}

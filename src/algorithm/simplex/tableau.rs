//! # The Simplex tableau
//!
//! A dense tableau of `m + 1` rows and `n + m + 1` columns: one row per constraint followed by the
//! objective row, and one column per decision variable, one per slack variable and the right hand
//! side. The shape is fixed at creation; pivots only change the values.
use std::cmp::max;
use std::fmt::{Display, Formatter, Result as FormatResult};

use thiserror::Error;

use crate::data::linear_program::elements::Sense;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::solution::{Point, Solution};
use crate::data::number_types::traits::Real;

/// The origin is not a basic feasible solution of the problem.
///
/// After rewriting all constraints as `a x <= b`, some `b` is negative. Finding a different initial
/// basis would require an artificial phase, which this tableau doesn't have.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("constraint {constraint} excludes the origin, the slack basis is not feasible")]
pub struct NotApplicable {
    /// Index of the first constraint with a negative right hand side after normalization.
    pub constraint: usize,
}

/// Dense Simplex tableau with a slack variable per constraint.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Constraint rows, followed by the objective row. Each row has `n + m + 1` values, the last
    /// one being the right hand side.
    rows: Vec<Vec<F>>,
    /// For each constraint row, the index of the column that is basic in that row.
    basis: Vec<usize>,
    /// Number of decision variables `n`.
    nr_structural: usize,
    /// The objective row holds `-c` when maximizing and `c` when minimizing.
    sense: Sense,
}

impl<F: Real> Tableau<F> {
    /// Create the initial tableau, with the slack variables forming the basis.
    ///
    /// # Arguments
    ///
    /// * `program`: Problem to solve. Its decision variables are taken to be nonnegative.
    /// * `epsilon`: Right hand sides above `-epsilon` are accepted (and clamped to zero if
    /// negative).
    ///
    /// # Errors
    ///
    /// `NotApplicable` if a normalized constraint has a negative right hand side.
    pub fn new(program: &LinearProgram<F>, epsilon: F) -> Result<Self, NotApplicable> {
        let n = program.dimension();
        let m = program.nr_constraints();
        let width = n + m + 1;

        let mut rows = Vec::with_capacity(m + 1);
        for (i, constraint) in program.constraints().iter().enumerate() {
            let (coefficients, bound) = constraint.normalized();
            if bound < -epsilon {
                return Err(NotApplicable { constraint: i });
            }

            let mut row = coefficients;
            row.resize(width, F::zero());
            row[n + i] = F::one();
            row[width - 1] = bound.max(F::zero());
            rows.push(row);
        }

        let sense = program.objective().sense();
        let mut objective_row = program.objective().coefficients().iter()
            .map(|&c| match sense {
                Sense::Maximize => -c,
                Sense::Minimize => c,
            })
            .collect::<Vec<_>>();
        objective_row.resize(width, F::zero());
        rows.push(objective_row);

        Ok(Self {
            rows,
            basis: (n..(n + m)).collect(),
            nr_structural: n,
            sense,
        })
    }

    /// Number of constraint rows `m`, excluding the objective row.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variable columns `n + m`, excluding the right hand side.
    pub fn nr_columns(&self) -> usize {
        self.nr_structural + self.nr_rows()
    }

    /// Number of decision variables `n`.
    pub fn nr_structural(&self) -> usize {
        self.nr_structural
    }

    /// Value in a constraint row or the objective row (index `m`).
    pub fn entry(&self, row: usize, column: usize) -> F {
        debug_assert!(row <= self.nr_rows());
        debug_assert!(column <= self.nr_columns());

        self.rows[row][column]
    }

    /// Current right hand side of a constraint row.
    pub fn rhs(&self, row: usize) -> F {
        debug_assert!(row < self.nr_rows());

        self.rows[row][self.nr_columns()]
    }

    /// Entry of the objective row in a variable column.
    pub fn relative_cost(&self, column: usize) -> F {
        debug_assert!(column < self.nr_columns());

        self.rows[self.nr_rows()][column]
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis.contains(&column)
    }

    /// Index of the column that is basic in a row.
    pub fn basis_column_index_for_row(&self, row: usize) -> usize {
        self.basis[row]
    }

    /// Whether no column can improve the objective anymore.
    ///
    /// True iff every objective row entry, excluding the right hand side, is at least `-epsilon`.
    pub fn is_optimal(&self, epsilon: F) -> bool {
        (0..self.nr_columns()).all(|j| self.relative_cost(j) >= -epsilon)
    }

    /// Determine the row to pivot on.
    ///
    /// This is the row with the minimal ratio between the right hand side and the column entry,
    /// among the rows where that entry is strictly positive. Ties go to the first row.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering column.
    /// * `epsilon`: Entries below this value are not considered positive.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize, epsilon: F) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut min_values: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.rows[row][column];
            if xij > epsilon {
                let ratio = self.rhs(row) / xij;
                match min_values {
                    Some((_, min_ratio)) if ratio >= min_ratio => {},
                    _ => min_values = Some((row, ratio)),
                }
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// Pivot on an element, bringing its column into the basis.
    ///
    /// The pivot row is divided by the pivot element, after which the column is eliminated from all
    /// other rows (including the objective row).
    pub fn bring_into_basis(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(pivot_row < self.nr_rows());
        debug_assert!(pivot_column < self.nr_columns());
        debug_assert!(!self.rows[pivot_row][pivot_column].is_zero());

        let pivot = self.rows[pivot_row][pivot_column];
        for value in &mut self.rows[pivot_row] {
            *value = *value / pivot;
        }
        self.rows[pivot_row][pivot_column] = F::one();

        let normalized = self.rows[pivot_row].clone();
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == pivot_row {
                continue;
            }
            let factor = row[pivot_column];
            if factor.is_zero() {
                continue;
            }
            for (value, &p) in row.iter_mut().zip(&normalized) {
                *value = *value - factor * p;
            }
            row[pivot_column] = F::zero();
        }

        self.basis[pivot_row] = pivot_column;
    }

    /// Row in which a column is a unit column, if it is one.
    ///
    /// A unit column has a single one and zeros elsewhere, considering the constraint rows only.
    pub fn unit_column_row(&self, column: usize, epsilon: F) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        let mut one_at = None;
        for row in 0..self.nr_rows() {
            let value = self.rows[row][column];
            if (value - F::one()).is_negligible(epsilon) && one_at.is_none() {
                one_at = Some(row);
            } else if !value.is_negligible(epsilon) {
                return None;
            }
        }

        one_at
    }

    /// Values of the decision variables in the current basic solution.
    ///
    /// Basic variables take the right hand side value of their row, others are zero.
    pub fn current_point(&self) -> Point<F> {
        let mut values = vec![F::zero(); self.nr_structural];
        for (row, &column) in self.basis.iter().enumerate() {
            if column < self.nr_structural {
                values[column] = self.rhs(row);
            }
        }

        Point::new(values)
    }

    /// Objective function value of the current basic solution.
    ///
    /// The objective row's right hand side, negated back when minimizing.
    pub fn objective_function_value(&self) -> F {
        let value = self.rows[self.nr_rows()][self.nr_columns()];
        match self.sense {
            Sense::Maximize => value,
            Sense::Minimize => -value,
        }
    }

    /// The current basic solution with its objective value.
    pub fn current_solution(&self) -> Solution<F> {
        Solution::new(self.current_point(), self.objective_function_value())
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F: Real>(tableau: &Tableau<F>, epsilon: F) {
    // Tolerance grows with the pivots' accumulated rounding
    let tolerance = epsilon * F::from_config(1e3);

    for row in 0..tableau.nr_rows() {
        let column = tableau.basis_column_index_for_row(row);
        debug_assert_eq!(
            tableau.unit_column_row(column, tolerance), Some(row),
            "Column {} is not equal to e_{}", column, row,
        );
        debug_assert!(
            tableau.relative_cost(column).is_negligible(tolerance),
            "Relative cost of column {} is not zero", column,
        );
        debug_assert!(
            tableau.rhs(row) >= -tolerance,
            "rhs (b) is not always nonnegative: at index {} we have {} < 0", row, tableau.rhs(row),
        );
    }
}

impl<F: Real> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        let precision = f.precision().unwrap_or(2);
        let format = |value: F| {
            // Avoid printing "-0.00"
            let value = if value.is_zero() { F::zero() } else { value };
            format!("{:.*}", precision, value)
        };
        let label = |j: usize| if j < self.nr_structural {
            format!("x{}", j + 1)
        } else {
            format!("s{}", j - self.nr_structural + 1)
        };

        let objective = format(self.rows[self.nr_rows()][self.nr_columns()]);
        let cost = (0..self.nr_columns()).map(|j| format(self.relative_cost(j))).collect::<Vec<_>>();
        let b = (0..self.nr_rows()).map(|i| format(self.rhs(i))).collect::<Vec<_>>();
        let columns = (0..self.nr_columns())
            .map(|j| (0..self.nr_rows()).map(|i| format(self.rows[i][j])).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let row_counter_width = "cost".len();
        let column_width = columns.iter().enumerate()
            .map(|(j, column)| {
                column.iter().map(String::len)
                    .chain([label(j).len(), cost[j].len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();
        let b_inner_width = max(b.iter().map(String::len).max().unwrap_or(0), objective.len());

        // Column headers
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", label(j), width = width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1
            + column_width.iter().map(|l| 1 + l).sum::<usize>();
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", cost[j], width = width)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", "-".repeat(total_width))?;

        for i in 0..self.nr_rows() {
            write!(f, "{0:>width$} |", label(self.basis[i]), width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (j, width) in column_width.iter().enumerate() {
                write!(f, " {0:^width$}", columns[j][i], width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

//! # Square systems
//!
//! A vertex of a feasible region is the intersection of the boundaries of `n` constraints in
//! dimension `n`. Finding it means solving a dense `n x n` system, which is what this module does.
use thiserror::Error;

use crate::data::number_types::traits::Real;

/// The system has no unique solution.
///
/// This is an expected outcome when enumerating constraint combinations (parallel or dependent
/// boundaries), and callers typically skip the combination.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("the system has no unique solution")]
pub struct Singular;

/// Solve `A x = b` for a square matrix `A`.
///
/// Two dimensional systems are solved with Cramer's rule, larger ones with Gaussian elimination
/// using partial pivoting.
///
/// # Arguments
///
/// * `matrix`: Rows of `A`, each of length `n`.
/// * `rhs`: The vector `b`, of length `n`.
/// * `epsilon`: Determinants and pivots with an absolute value below this value are treated as
/// zero.
///
/// # Errors
///
/// `Singular` if the matrix is not invertible, up to the tolerance.
pub fn solve_square_system<F: Real>(
    matrix: &[Vec<F>],
    rhs: &[F],
    epsilon: F,
) -> Result<Vec<F>, Singular> {
    debug_assert_eq!(matrix.len(), rhs.len());
    debug_assert!(matrix.iter().all(|row| row.len() == matrix.len()));

    match matrix.len() {
        0 => Err(Singular),
        2 => {
            let (x, y) = intersect_lines(
                (matrix[0][0], matrix[0][1], rhs[0]),
                (matrix[1][0], matrix[1][1], rhs[1]),
                epsilon,
            )?;
            Ok(vec![x, y])
        },
        _ => gaussian_elimination(matrix, rhs, epsilon),
    }
}

/// Intersection of two lines `a x + b y = c` in the plane.
///
/// # Arguments
///
/// * `first`, `second`: Tuples `(a, b, c)`.
/// * `epsilon`: Below this absolute value, the determinant is considered zero.
///
/// # Errors
///
/// `Singular` when the lines are parallel or coincide.
pub fn intersect_lines<F: Real>(
    (a1, b1, c1): (F, F, F),
    (a2, b2, c2): (F, F, F),
    epsilon: F,
) -> Result<(F, F), Singular> {
    let denominator = a1 * b2 - a2 * b1;
    if denominator.is_negligible(epsilon) {
        return Err(Singular);
    }

    let x = (b2 * c1 - b1 * c2) / denominator;
    let y = (a1 * c2 - a2 * c1) / denominator;
    Ok((x, y))
}

/// Gaussian elimination with partial pivoting on a copy of the system.
fn gaussian_elimination<F: Real>(
    matrix: &[Vec<F>],
    rhs: &[F],
    epsilon: F,
) -> Result<Vec<F>, Singular> {
    let n = matrix.len();
    // Augmented matrix [A | b]
    let mut rows = matrix.iter()
        .zip(rhs)
        .map(|(row, &b)| {
            let mut augmented = row.clone();
            augmented.push(b);
            augmented
        })
        .collect::<Vec<_>>();

    for column in 0..n {
        let pivot_row = (column..n)
            .max_by(|&i, &j| rows[i][column].abs().partial_cmp(&rows[j][column].abs())
                .unwrap_or(std::cmp::Ordering::Equal))
            .ok_or(Singular)?;
        if rows[pivot_row][column].is_negligible(epsilon) {
            return Err(Singular);
        }
        rows.swap(column, pivot_row);

        for row in (column + 1)..n {
            let factor = rows[row][column] / rows[column][column];
            if factor.is_zero() {
                continue;
            }
            for k in column..=n {
                let subtrahend = factor * rows[column][k];
                rows[row][k] = rows[row][k] - subtrahend;
            }
        }
    }

    // Back substitution
    let mut solution = vec![F::zero(); n];
    for row in (0..n).rev() {
        let known = ((row + 1)..n).fold(F::zero(), |total, k| total + rows[row][k] * solution[k]);
        solution[row] = (rows[row][n] - known) / rows[row][row];
    }

    if solution.iter().all(|value| value.is_finite()) {
        Ok(solution)
    } else {
        Err(Singular)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::system::{intersect_lines, Singular, solve_square_system};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn lines() {
        // 2x + y = 20, x + 2y = 20
        let (x, y) = intersect_lines((2_f64, 1_f64, 20_f64), (1_f64, 2_f64, 20_f64), EPSILON).unwrap();
        assert_relative_eq!(x, 20_f64 / 3_f64);
        assert_relative_eq!(y, 20_f64 / 3_f64);
    }

    #[test]
    fn parallel_lines() {
        assert_eq!(intersect_lines((1_f64, 0_f64, 1_f64), (1_f64, 0_f64, 2_f64), EPSILON), Err(Singular));
        assert_eq!(intersect_lines((1_f64, 1_f64, 1_f64), (2_f64, 2_f64, 2_f64), EPSILON), Err(Singular));
    }

    #[test]
    fn two_dimensional_dispatch() {
        let matrix = vec![vec![1_f64, 0_f64], vec![0_f64, 1_f64]];
        assert_eq!(solve_square_system(&matrix, &[2_f64, 3_f64], EPSILON), Ok(vec![2_f64, 3_f64]));
    }

    #[test]
    fn three_dimensional() {
        // x + y + z = 6, 2y + 5z = -4, 2x + 5y - z = 27
        let matrix = vec![
            vec![1_f64, 1_f64, 1_f64],
            vec![0_f64, 2_f64, 5_f64],
            vec![2_f64, 5_f64, -1_f64],
        ];
        let solution = solve_square_system(&matrix, &[6_f64, -4_f64, 27_f64], EPSILON).unwrap();
        assert_abs_diff_eq!(solution[0], 5_f64, epsilon = 1e-12);
        assert_abs_diff_eq!(solution[1], 3_f64, epsilon = 1e-12);
        assert_abs_diff_eq!(solution[2], -2_f64, epsilon = 1e-12);
    }

    #[test]
    fn three_dimensional_needs_row_swap() {
        let matrix = vec![
            vec![0_f64, 1_f64, 0_f64],
            vec![1_f64, 0_f64, 0_f64],
            vec![0_f64, 0_f64, 1_f64],
        ];
        assert_eq!(solve_square_system(&matrix, &[1_f64, 2_f64, 3_f64], EPSILON), Ok(vec![2_f64, 1_f64, 3_f64]));
    }

    #[test]
    fn three_dimensional_singular() {
        let matrix = vec![
            vec![1_f64, 2_f64, 3_f64],
            vec![2_f64, 4_f64, 6_f64],
            vec![0_f64, 0_f64, 1_f64],
        ];
        assert_eq!(solve_square_system(&matrix, &[1_f64, 2_f64, 3_f64], EPSILON), Err(Singular));
    }

    #[test]
    fn one_dimensional() {
        assert_eq!(solve_square_system(&[vec![4_f64]], &[2_f64], EPSILON), Ok(vec![0.5]));
        assert_eq!(solve_square_system(&[vec![0_f64]], &[2_f64], EPSILON), Err(Singular));
    }

    #[test]
    fn empty() {
        assert_eq!(solve_square_system::<f64>(&[], &[], EPSILON), Err(Singular));
    }
}

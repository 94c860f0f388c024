//! Gaussian elimination with partial pivoting.
//!
//! The input is an augmented matrix: M rows, the coefficient columns, then a
//! single right-hand-side column at index N-1. Elimination runs on a private
//! copy, so the caller's matrix is never modified.
//!
//! Rank deficiency is not an error. A column that is zero from the current
//! pivot row downward is skipped, and back substitution later divides by the
//! zero diagonal it left behind, producing NaN or an infinity in the affected
//! components.

use log::{debug, trace};

use super::{Matrix, Vector};
use crate::precision;
use crate::{LinError, Result};

/// Outcome of a full elimination pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Elimination {
    /// Working matrix after forward elimination (row-echelon form).
    pub reduced: Matrix,
    /// Back-substituted solution, one component per unknown.
    pub solution: Vector,
}

impl Elimination {
    /// False when the system had no unique solution.
    pub fn is_unique(&self) -> bool {
        self.solution.is_finite()
    }
}

impl Matrix {
    /// Solves the augmented system and returns the solution vector.
    ///
    /// # Errors
    /// [`LinError::IncompatibleShape`] unless `M <= N <= M + 1`.
    ///
    /// A singular system is still `Ok`: check [`Vector::is_finite`].
    pub fn gauss_solve(&self) -> Result<Vector> {
        Ok(self.gauss_eliminate()?.solution)
    }

    /// Runs forward elimination and back substitution, keeping the reduced matrix.
    pub fn gauss_eliminate(&self) -> Result<Elimination> {
        let (m, n) = (self.rows(), self.cols());
        // N - 1 unknowns need N - 1 <= M rows to back-substitute from
        if n < m || n > m + 1 {
            return Err(LinError::IncompatibleShape { rows: m, cols: n });
        }

        let mut work = self.copy();
        let mut row_pivot = 0;
        let mut col_pivot = 0;

        while col_pivot < n && row_pivot < m {
            let column = work.get_col(col_pivot)?;
            let (magnitude, max_row) = column.largest_magnitude(row_pivot, m)?;

            if magnitude == 0.0 {
                debug!(
                    "column {} is zero from row {} down, skipping pivot row",
                    col_pivot, row_pivot
                );
                row_pivot += 1;
                continue;
            }

            trace!(
                "pivot ({}, {}): swapping in row {} (|a| = {})",
                row_pivot, col_pivot, max_row, magnitude
            );
            work.swap_rows(row_pivot, max_row)?;
            eliminate_below(&mut work, row_pivot, col_pivot)?;

            row_pivot += 1;
            col_pivot += 1;
        }

        let solution = work.back_substitution()?;
        if !solution.is_finite() {
            debug!("system {}x{} has no unique solution: {}", m, n, solution);
        }
        Ok(Elimination {
            reduced: work,
            solution,
        })
    }

    /// Solves an upper-triangular augmented matrix from the last unknown up.
    ///
    /// Column N-1 is the right-hand side, leaving N-1 unknowns. Each component
    /// is rounded to [`precision::SOLUTION_DECIMALS`]. A zero on the diagonal
    /// yields NaN (`0/0`) or an infinity in that component.
    pub fn back_substitution(&self) -> Result<Vector> {
        let n = self.cols();
        let unknowns = n - 1;
        let mut x = Vector::make(unknowns, 0.0)?;

        for i in (0..unknowns).rev() {
            let mut y = self.get(i, n - 1)?;
            let diagonal = self.get(i, i)?;
            for j in (i + 1)..unknowns {
                let a = self.get(i, j)?;
                // skipping zeros keeps NaN from an unconstrained x[j] out of this row
                if a == 0.0 {
                    continue;
                }
                y -= a * x.get(j)?;
            }
            x.set(i, precision::round_to(y / diagonal, precision::SOLUTION_DECIMALS))?;
        }
        Ok(x)
    }
}

/// Clears column `col_pivot` below the pivot row.
fn eliminate_below(work: &mut Matrix, row_pivot: usize, col_pivot: usize) -> Result<()> {
    let (m, n) = (work.rows(), work.cols());
    let pivot = work.get(row_pivot, col_pivot)?;

    for i in (row_pivot + 1)..m {
        let factor = work.get(i, col_pivot)? / pivot;
        if i < n {
            work.set(i, col_pivot, 0.0)?;
        }
        for j in (col_pivot + 1)..n {
            let value = work.get(i, j)? - work.get(row_pivot, j)? * factor;
            work.set(i, j, value)?;
        }
    }
    Ok(())
}

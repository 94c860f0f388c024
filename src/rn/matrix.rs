//! Column-major dense matrix.
//!
//! Element `(i, j)` lives at `data[i + j * rows]`:
//! ```text
//!          |  0  3  |
//!      A = |  1  4  |      data = [0, 1, 2, 3, 4, 5]
//!          |  2  5  |
//! ```
//! Rows and columns are read as independent [`Vector`] copies.

use std::fmt;
use serde::{Deserialize, Serialize};

use super::Vector;
use crate::precision;
use crate::{LinError, Result};

/// M x N matrix stored column by column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix", into = "RawMatrix")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

/// Unvalidated serialized form.
#[derive(Serialize, Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = LinError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Matrix::from_column_major(raw.rows, raw.cols, raw.data)
    }
}

impl From<Matrix> for RawMatrix {
    fn from(m: Matrix) -> Self {
        RawMatrix {
            rows: m.rows,
            cols: m.cols,
            data: m.data,
        }
    }
}

/// Validates the shape and returns the element count.
fn check_dims(m: usize, n: usize) -> Result<usize> {
    if m < 1 || n < 1 {
        return Err(LinError::InvalidDimension(format!("matrix of shape {}x{}", m, n)));
    }
    m.checked_mul(n)
        .ok_or_else(|| LinError::InvalidDimension(format!("matrix of shape {}x{} overflows", m, n)))
}

impl Matrix {
    /// Creates an `m x n` matrix with every element set to `fill`.
    pub fn make(m: usize, n: usize, fill: f64) -> Result<Self> {
        let len = check_dims(m, n)?;
        Ok(Self {
            rows: m,
            cols: n,
            data: vec![fill; len],
        })
    }

    /// Wraps column-major `data` as an `m x n` matrix.
    pub fn from_column_major(m: usize, n: usize, data: Vec<f64>) -> Result<Self> {
        let len = check_dims(m, n)?;
        if data.len() != len {
            return Err(LinError::ShapeMismatch {
                left: len,
                right: data.len(),
            });
        }
        Ok(Self { rows: m, cols: n, data })
    }

    /// Builds a matrix from row literals. All rows must have the same length.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.as_ref().len());
        let mut mat = Matrix::make(m, n, 0.0)?;
        for (i, row) in rows.iter().enumerate() {
            mat.set_row(i, &Vector::from(row.as_ref()))?;
        }
        Ok(mat)
    }

    /// Number of rows (M).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (N).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Column-major backing data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn check_row(&self, i: usize) -> Result<()> {
        if i >= self.rows {
            return Err(LinError::RowOutOfRange { index: i, rows: self.rows });
        }
        Ok(())
    }

    fn check_col(&self, j: usize) -> Result<()> {
        if j >= self.cols {
            return Err(LinError::ColOutOfRange { index: j, cols: self.cols });
        }
        Ok(())
    }

    /// Gets value at (i, j). 0-indexed.
    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        self.check_row(i)?;
        self.check_col(j)?;
        Ok(self.data[i + j * self.rows])
    }

    /// Sets value at (i, j). 0-indexed.
    pub fn set(&mut self, i: usize, j: usize, value: f64) -> Result<()> {
        self.check_row(i)?;
        self.check_col(j)?;
        self.data[i + j * self.rows] = value;
        Ok(())
    }

    /// Returns a copy of column `j`.
    pub fn get_col(&self, j: usize) -> Result<Vector> {
        self.check_col(j)?;
        let start = j * self.rows;
        Ok(Vector::from(&self.data[start..start + self.rows]))
    }

    /// Copies `v` into column `j`.
    pub fn set_col(&mut self, j: usize, v: &Vector) -> Result<()> {
        if v.len() != self.rows {
            return Err(LinError::ColumnLengthMismatch {
                expected: self.rows,
                found: v.len(),
            });
        }
        self.check_col(j)?;
        let start = j * self.rows;
        self.data[start..start + self.rows].copy_from_slice(v.as_slice());
        Ok(())
    }

    /// Returns a copy of row `i`.
    pub fn get_row(&self, i: usize) -> Result<Vector> {
        self.check_row(i)?;
        let row: Vec<f64> = (0..self.cols).map(|j| self.data[i + j * self.rows]).collect();
        Ok(Vector::from(row))
    }

    /// Copies `v` into row `i`.
    pub fn set_row(&mut self, i: usize, v: &Vector) -> Result<()> {
        if v.len() != self.cols {
            return Err(LinError::RowLengthMismatch {
                expected: self.cols,
                found: v.len(),
            });
        }
        self.check_row(i)?;
        for (j, &value) in v.as_slice().iter().enumerate() {
            self.data[i + j * self.rows] = value;
        }
        Ok(())
    }

    /// Exchanges rows `i` and `j` in place.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<()> {
        let row_i = self.get_row(i)?;
        let row_j = self.get_row(j)?;
        self.set_row(i, &row_j)?;
        self.set_row(j, &row_i)
    }

    /// Deep copy of this matrix.
    pub fn copy(&self) -> Matrix {
        self.clone()
    }

    /// Largest absolute value over all elements and its column-major index.
    pub fn largest_magnitude(&self) -> (f64, usize) {
        let mut best = self.data[0].abs();
        let mut index = 0;
        for (k, v) in self.data.iter().enumerate().skip(1) {
            if v.abs() > best {
                best = v.abs();
                index = k;
            }
        }
        (best, index)
    }

    /// Computes `A * x`.
    pub fn multiply_vector(&self, x: &Vector) -> Result<Vector> {
        if x.len() != self.cols {
            return Err(LinError::ShapeMismatch {
                left: self.cols,
                right: x.len(),
            });
        }
        let mut result = vec![0.0; self.rows];
        for (j, &xj) in x.as_slice().iter().enumerate() {
            let column = &self.data[j * self.rows..(j + 1) * self.rows];
            for (acc, &a) in result.iter_mut().zip(column) {
                *acc += a * xj;
            }
        }
        Ok(Vector::from(result))
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            for j in 0..self.cols {
                let v = precision::round_to(self.data[i + j * self.rows], precision::MATRIX_DISPLAY_DECIMALS);
                write!(f, "{:>width$} ", v, width = precision::MATRIX_DISPLAY_WIDTH)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_column_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
    }

    #[test]
    fn test_matrix_make() {
        let m = Matrix::make(3, 2, 1.5).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 2);
        assert!(m.as_slice().iter().all(|&v| v == 1.5));
        assert!(matches!(Matrix::make(0, 2, 0.0), Err(LinError::InvalidDimension(_))));
        assert!(matches!(Matrix::make(2, 0, 0.0), Err(LinError::InvalidDimension(_))));
    }

    #[test]
    fn test_matrix_shape_overflow() {
        assert!(matches!(Matrix::make(usize::MAX, 2, 0.0), Err(LinError::InvalidDimension(_))));
        assert!(matches!(
            Matrix::from_column_major(usize::MAX / 2 + 1, 2, vec![0.0]),
            Err(LinError::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_matrix_column_major_layout() {
        let m = sample();
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
        assert_eq!(m.get(1, 0).unwrap(), 2.0);
        assert_eq!(m.get(0, 1).unwrap(), 3.0);
        assert_eq!(m.get(1, 2).unwrap(), 6.0);
        assert_eq!(
            Matrix::from_column_major(2, 2, vec![1.0]),
            Err(LinError::ShapeMismatch { left: 4, right: 1 })
        );
    }

    #[test]
    fn test_matrix_from_rows() {
        let m = Matrix::from_rows(&[[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]).unwrap();
        assert_eq!(m, sample());
        let ragged = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(ragged, Err(LinError::RowLengthMismatch { expected: 2, found: 1 }));
        let empty: [[f64; 2]; 0] = [];
        assert!(Matrix::from_rows(&empty).is_err());
    }

    #[test]
    fn test_matrix_access_errors() {
        let mut m = sample();
        assert_eq!(m.get(2, 0), Err(LinError::RowOutOfRange { index: 2, rows: 2 }));
        assert_eq!(m.get(0, 3), Err(LinError::ColOutOfRange { index: 3, cols: 3 }));
        assert_eq!(m.set(5, 5, 0.0), Err(LinError::RowOutOfRange { index: 5, rows: 2 }));
        assert!(m.get_col(3).is_err());
        assert!(m.get_row(2).is_err());
    }

    #[test]
    fn test_matrix_rows_and_cols() {
        let mut m = sample();
        assert_eq!(m.get_row(1).unwrap(), Vector::from([2.0, 4.0, 6.0]));
        assert_eq!(m.get_col(1).unwrap(), Vector::from([3.0, 4.0]));

        m.set_col(2, &Vector::from([-1.0, -2.0])).unwrap();
        assert_eq!(m.get_col(2).unwrap(), Vector::from([-1.0, -2.0]));
        m.set_row(0, &Vector::from([7.0, 8.0, 9.0])).unwrap();
        assert_eq!(m.get_row(0).unwrap(), Vector::from([7.0, 8.0, 9.0]));

        assert_eq!(
            m.set_col(0, &Vector::from([1.0, 2.0, 3.0])),
            Err(LinError::ColumnLengthMismatch { expected: 2, found: 3 })
        );
        assert_eq!(
            m.set_row(0, &Vector::from([1.0])),
            Err(LinError::RowLengthMismatch { expected: 3, found: 1 })
        );
    }

    #[test]
    fn test_matrix_row_copy_does_not_alias() {
        let m = sample();
        let mut row = m.get_row(0).unwrap();
        row.set(0, 100.0).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_matrix_swap_rows() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        m.swap_rows(0, 2).unwrap();
        assert_eq!(m.get_row(0).unwrap(), Vector::from([5.0, 6.0]));
        assert_eq!(m.get_row(2).unwrap(), Vector::from([1.0, 2.0]));
        m.swap_rows(1, 1).unwrap();
        assert_eq!(m.get_row(1).unwrap(), Vector::from([3.0, 4.0]));
        assert_eq!(m.swap_rows(0, 3), Err(LinError::RowOutOfRange { index: 3, rows: 3 }));
    }

    #[test]
    fn test_matrix_copy_is_deep() {
        let m = sample();
        let mut c = m.copy();
        c.set(0, 0, -10.0).unwrap();
        assert_eq!(m.get(0, 0).unwrap(), 1.0);
    }

    #[test]
    fn test_matrix_largest_magnitude() {
        let m = Matrix::from_column_major(2, 2, vec![1.0, -9.0, 4.0, 9.0]).unwrap();
        assert_eq!(m.largest_magnitude(), (9.0, 1));
    }

    #[test]
    fn test_matrix_multiply_vector() {
        let m = sample();
        let y = m.multiply_vector(&Vector::from([1.0, 0.0, -1.0])).unwrap();
        assert_eq!(y, Vector::from([-4.0, -4.0]));
        assert!(m.multiply_vector(&Vector::from([1.0])).is_err());
    }

    #[test]
    fn test_matrix_display() {
        let m = Matrix::from_rows(&[[1.0, 0.12345], [-2.5, 10.0]]).unwrap();
        assert_eq!(
            m.to_string(),
            "        1     0.123 \n     -2.5        10 "
        );
    }
}

//! Dense vector of `f64` components.
//!
//! Arithmetic returns new vectors and reports shape problems as [`LinError`].
//! A zero-length vector can only be obtained through the unchecked `From`
//! conversions; every operation on it reports [`LinError::EmptyVector`].

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::precision;
use crate::{LinError, Result};

/// An ordered sequence of real numbers.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    /// Creates a vector of length `n` with every element set to `fill`.
    pub fn make(n: usize, fill: f64) -> Result<Self> {
        if n < 1 {
            return Err(LinError::InvalidDimension(format!("vector of length {}", n)));
        }
        Ok(Self { values: vec![fill; n] })
    }

    /// Creates a vector from owned values. Rejects an empty input.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(LinError::InvalidDimension("vector of length 0".to_string()));
        }
        Ok(Self { values })
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for the zero-length error state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns component `i`.
    pub fn get(&self, i: usize) -> Result<f64> {
        self.values
            .get(i)
            .copied()
            .ok_or(LinError::IndexOutOfRange { index: i, len: self.len() })
    }

    /// Sets component `i` in place.
    pub fn set(&mut self, i: usize, value: f64) -> Result<()> {
        let len = self.len();
        match self.values.get_mut(i) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(LinError::IndexOutOfRange { index: i, len }),
        }
    }

    /// Overwrites the leading components with `values`.
    /// Components past the end of the slice are left untouched.
    pub fn set_slice(&mut self, values: &[f64]) -> Result<()> {
        if values.len() > self.len() {
            return Err(LinError::SliceLengthMismatch {
                len: self.len(),
                found: values.len(),
            });
        }
        self.values[..values.len()].copy_from_slice(values);
        Ok(())
    }

    /// True when no component is NaN or infinite.
    ///
    /// Solutions of singular systems fail this test.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|v| v.is_finite())
    }

    fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(LinError::EmptyVector);
        }
        Ok(())
    }

    fn ensure_same_shape(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinError::ShapeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        self.ensure_non_empty()
    }

    fn zip_with(&self, other: &Vector, op: impl Fn(f64, f64) -> f64) -> Result<Vector> {
        self.ensure_same_shape(other)?;
        Ok(Vector {
            values: self
                .values
                .iter()
                .zip(&other.values)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        })
    }

    /// Element-wise absolute value.
    pub fn abs(&self) -> Result<Vector> {
        self.ensure_non_empty()?;
        Ok(Vector {
            values: self.values.iter().map(|v| v.abs()).collect(),
        })
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns `s * self`.
    pub fn scale(&self, s: f64) -> Result<Vector> {
        self.ensure_non_empty()?;
        Ok(Vector {
            values: self.values.iter().map(|v| s * v).collect(),
        })
    }

    /// Computes dot product.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.ensure_same_shape(other)?;
        Ok(self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Returns cross product. Only defined for 3-vectors.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_shape(other)?;
        if self.len() != 3 {
            return Err(LinError::UnsupportedOrder(self.len()));
        }
        let (a, b) = (&self.values, &other.values);
        Ok(Vector {
            values: vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ],
        })
    }

    /// Euclidean norm.
    pub fn norm(&self) -> Result<f64> {
        Ok(self.dot(self)?.sqrt())
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Vector) -> Result<f64> {
        other.sub(self)?.norm()
    }

    /// Cosine of the angle between `self` and `other`.
    ///
    /// A zero-norm operand is not checked: the result is NaN in that case.
    pub fn cosine_angle(&self, other: &Vector) -> Result<f64> {
        let dot = self.dot(other)?;
        Ok(dot / (self.norm()? * other.norm()?))
    }

    /// Largest absolute value in `[begin, min(end, len))` and its index.
    ///
    /// Index `begin` is always scanned, even when `end <= begin`.
    /// Ties keep the first occurrence.
    pub fn largest_magnitude(&self, begin: usize, end: usize) -> Result<(f64, usize)> {
        self.ensure_non_empty()?;
        let mut best = self.get(begin)?.abs();
        let mut index = begin;
        let stop = end.min(self.len());
        for k in (begin + 1)..stop {
            let candidate = self.values[k].abs();
            if candidate > best {
                best = candidate;
                index = k;
            }
        }
        Ok((best, index))
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self { values: values.to_vec() }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self { values: values.to_vec() }
    }
}

// NaN marks an unconstrained component, so it matches anything.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(&a, &b)| a == b || a.is_nan() || b.is_nan())
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector {
            values: self.values.into_iter().map(|v| -v).collect(),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", precision::round_to(*v, precision::VECTOR_DISPLAY_DECIMALS))?;
        }
        write!(f, "]")
    }
}

//! Line `x = point + λ * direction` in N dimensions.

use std::fmt;
use serde::{Deserialize, Serialize};

use super::{Intersection, Plane};
use crate::{LinError, Matrix, Result, Vector};

/// A line defined by a base point and a direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLine", into = "RawLine")]
pub struct Line {
    point: Vector,
    direction: Vector,
}

#[derive(Serialize, Deserialize)]
struct RawLine {
    point: Vector,
    direction: Vector,
}

impl TryFrom<RawLine> for Line {
    type Error = LinError;

    fn try_from(raw: RawLine) -> Result<Self> {
        Line::new(raw.point, raw.direction)
    }
}

impl From<Line> for RawLine {
    fn from(line: Line) -> Self {
        RawLine {
            point: line.point,
            direction: line.direction,
        }
    }
}

impl Line {
    /// Creates a line through `point` along `direction`.
    pub fn new(point: Vector, direction: Vector) -> Result<Self> {
        if point.len() != direction.len() {
            return Err(LinError::ShapeMismatch {
                left: point.len(),
                right: direction.len(),
            });
        }
        if point.is_empty() {
            return Err(LinError::EmptyVector);
        }
        Ok(Self { point, direction })
    }

    /// Creates the line from `p1` to `p2`: `x = p1 + λ * (p2 - p1)`.
    pub fn through(p1: &Vector, p2: &Vector) -> Result<Self> {
        Ok(Self {
            point: p1.clone(),
            direction: p2.sub(p1)?,
        })
    }

    #[inline]
    pub fn point(&self) -> &Vector {
        &self.point
    }

    #[inline]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Dimension of the ambient space.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.point.len()
    }

    /// Returns the point at parameter `s`.
    pub fn at(&self, s: f64) -> Result<Vector> {
        self.point.add(&self.direction.scale(s)?)
    }

    /// Intersects two lines.
    ///
    /// Solves `p1 + t * d1 = p2 + s * d2`; the parameters are `[t, s]`.
    /// Only 2-D and 3-D lines fit the solver's shape contract, anything else is
    /// [`LinError::IncompatibleShape`].
    pub fn intersect_line(&self, other: &Line) -> Result<Intersection> {
        let mut system = Matrix::make(self.dimension(), 3, 0.0)?;
        system.set_col(0, &self.direction)?;
        system.set_col(1, &other.direction.scale(-1.0)?)?;
        system.set_col(2, &other.point.sub(&self.point)?)?;

        let parameters = system.gauss_solve()?;
        let on_self = self.at(parameters.get(0)?)?;
        let on_other = other.at(parameters.get(1)?)?;
        Intersection::reconcile(&system, parameters, on_self, &on_other)
    }

    /// Intersects this line with a plane. See [`Plane::intersect_line`].
    pub fn intersect_plane(&self, plane: &Plane) -> Result<Intersection> {
        plane.intersect_line(self)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x = {} + λ * {}", self.point, self.direction)
    }
}

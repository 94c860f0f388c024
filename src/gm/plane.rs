//! Plane `x = point + λ * direction1 + μ * direction2`.

use std::fmt;
use serde::{Deserialize, Serialize};

use super::{Intersection, Line};
use crate::{LinError, Matrix, Result, Vector};

/// A plane spanned by two directions from a base point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlane", into = "RawPlane")]
pub struct Plane {
    point: Vector,
    direction1: Vector,
    direction2: Vector,
}

#[derive(Serialize, Deserialize)]
struct RawPlane {
    point: Vector,
    direction1: Vector,
    direction2: Vector,
}

impl TryFrom<RawPlane> for Plane {
    type Error = LinError;

    fn try_from(raw: RawPlane) -> Result<Self> {
        Plane::new(raw.point, raw.direction1, raw.direction2)
    }
}

impl From<Plane> for RawPlane {
    fn from(plane: Plane) -> Self {
        RawPlane {
            point: plane.point,
            direction1: plane.direction1,
            direction2: plane.direction2,
        }
    }
}

impl Plane {
    /// Creates a plane from a base point and two spanning directions.
    pub fn new(point: Vector, direction1: Vector, direction2: Vector) -> Result<Self> {
        for d in [&direction1, &direction2] {
            if d.len() != point.len() {
                return Err(LinError::ShapeMismatch {
                    left: point.len(),
                    right: d.len(),
                });
            }
        }
        if point.is_empty() {
            return Err(LinError::EmptyVector);
        }
        Ok(Self {
            point,
            direction1,
            direction2,
        })
    }

    /// Creates the plane through three points, anchored at `p1`.
    pub fn through(p1: &Vector, p2: &Vector, p3: &Vector) -> Result<Self> {
        Ok(Self {
            point: p1.clone(),
            direction1: p2.sub(p1)?,
            direction2: p3.sub(p1)?,
        })
    }

    #[inline]
    pub fn point(&self) -> &Vector {
        &self.point
    }

    #[inline]
    pub fn direction1(&self) -> &Vector {
        &self.direction1
    }

    #[inline]
    pub fn direction2(&self) -> &Vector {
        &self.direction2
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.point.len()
    }

    /// Returns the point at parameters `(s, t)`.
    pub fn at(&self, s: f64, t: f64) -> Result<Vector> {
        self.point
            .add(&self.direction1.scale(s)?)?
            .add(&self.direction2.scale(t)?)
    }

    /// Normal vector `direction1 x direction2`. 3-D only.
    pub fn normal(&self) -> Result<Vector> {
        self.direction1.cross(&self.direction2)
    }

    /// Intersects a line with this plane.
    ///
    /// Solves `pl + t * dl = pp + λ * d1 + μ * d2`; the parameters are
    /// `[t, λ, μ]` and the point is taken on the line. A line parallel to or
    /// lying in the plane gives non-finite components.
    pub fn intersect_line(&self, line: &Line) -> Result<Intersection> {
        let mut system = Matrix::make(line.dimension(), 4, 0.0)?;
        system.set_col(0, line.direction())?;
        system.set_col(1, &self.direction1.scale(-1.0)?)?;
        system.set_col(2, &self.direction2.scale(-1.0)?)?;
        system.set_col(3, &self.point.sub(line.point())?)?;

        let parameters = system.gauss_solve()?;
        let on_line = line.at(parameters.get(0)?)?;
        let on_plane = self.at(parameters.get(1)?, parameters.get(2)?)?;
        Intersection::reconcile(&system, parameters, on_line, &on_plane)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x = {} + λ * {} + μ * {}",
            self.point, self.direction1, self.direction2
        )
    }
}

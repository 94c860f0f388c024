//! Lines and planes in parametric form.
//!
//! Intersections are posed as an augmented system and handed to
//! [`Matrix::gauss_solve`](crate::Matrix::gauss_solve). Parallel, coincident
//! or skew configurations do not fail: they come back as an [`Intersection`]
//! with non-finite components.

mod line;
mod plane;

pub use line::Line;
pub use plane::Plane;

use log::debug;

use crate::precision;
use crate::{Matrix, Result, Vector};

/// Solved intersection parameters and the point they describe.
#[derive(Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Parameters in the order the unknowns were posed (e.g. `[t, λ, μ]`).
    pub parameters: Vector,
    pub point: Vector,
}

impl Intersection {
    /// False when the primitives do not meet in a single point.
    pub fn is_finite(&self) -> bool {
        self.parameters.is_finite() && self.point.is_finite()
    }

    /// Builds the result from the point reached on each primitive.
    ///
    /// Back substitution only reads as many rows as there are unknowns, so an
    /// inconsistent remaining row (skew lines) still yields finite parameters.
    /// Those are replaced by NaN when the two points disagree. A square
    /// `system` has no remaining rows and is taken as solved. The tolerance is
    /// [`precision::CONFUSION`] relative to the largest coefficient or point.
    pub(crate) fn reconcile(system: &Matrix, parameters: Vector, point: Vector, other: &Vector) -> Result<Self> {
        if system.rows() + 1 == system.cols() || !parameters.is_finite() {
            return Ok(Intersection { parameters, point });
        }
        let (coefficient, _) = system.largest_magnitude();
        let scale = coefficient.max(point.norm()?).max(other.norm()?);
        let tolerance = precision::CONFUSION * (1.0 + scale);
        let gap = point.distance(other)?;
        if gap > tolerance {
            debug!(
                "parametric points {} and {} are {:e} apart (tolerance {:e}), no intersection",
                point, other, gap, tolerance
            );
            return Ok(Intersection {
                parameters: Vector::make(parameters.len(), f64::NAN)?,
                point: Vector::make(point.len(), f64::NAN)?,
            });
        }
        Ok(Intersection { parameters, point })
    }
}

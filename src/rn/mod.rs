//! Numeric containers and the elimination engine.

mod vector;
mod matrix;
mod gauss;

pub use vector::Vector;
pub use matrix::Matrix;
pub use gauss::Elimination;

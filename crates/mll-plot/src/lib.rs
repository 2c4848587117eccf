//! Numeric helpers for plotting generated functions.
//!
//! The rendering layer feeds these into its chart widgets: [`sample`]
//! produces the x-axis grid for a function over an interval, and
//! [`tangent`] derives the straight line touching a function at a point
//! so the plot can overlay it on the curve.

pub mod sample;
pub mod tangent;

pub use sample::{evaluate, samples};
pub use tangent::{line, TangentLine};

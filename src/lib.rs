//! Evaluation of one-dimensional B-splines.
//!
//! Two evaluators are provided:
//! - [`core::basis`]: the textbook Cox-de Boor recursion, kept deliberately
//!   naive so it can serve as a reference oracle.
//! - [`core::spline::BSpline`]: a validated spline type with an efficient
//!   iterative de Boor evaluator for scalar points and point sequences.

pub mod core;

pub use crate::core::basis::{b_spline_basis, evaluate_spline};
pub use crate::core::spline::BSpline;

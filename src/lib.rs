//! Numerical refinement of bivariate residual functions.
//!
//! One algorithm family lives here: [`refine`](crate::refine::refiner::refine),
//! a newton-style root refiner that mutates a caller-owned point in place,
//! estimates gradients by finite differences, and returns per-run
//! convergence diagnostics.

pub mod refine;

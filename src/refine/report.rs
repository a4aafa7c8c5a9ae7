//! Defines the [`RefineReport`] struct returned by a refinement run.

use super::point::Point;
use super::trace::RefineTrace;

/// Reasons the refinement loop may terminate.
/// - [`Termination::ResidualZero`]   : residual reached exactly zero (success)
/// - [`Termination::PrecisionFloor`] : step fell below the representable-precision floor
/// - [`Termination::IterationLimit`] : iteration cap exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    ResidualZero,
    PrecisionFloor,
    IterationLimit,
}

/// Final report returned by [`refine`](super::refiner::refine).
///
/// - `point`        : final iterate (also written through the caller's point)
/// - `residual`     : last evaluated function value. On
///   [`Termination::PrecisionFloor`] and [`Termination::IterationLimit`]
///   stops the last update is never re-evaluated, so this is the value at
///   the point *before* the final step.
/// - `iterations`   : number of newton updates applied
/// - `evaluations`  : total function evaluations
/// - `termination`  : why the loop stopped
/// - `descent_rate` : max log-residual drop over the last two iteration
///   pairs; `None` with fewer than three residuals
/// - `trace`        : per-iteration diagnostic history ([`RefineTrace`])
#[derive(Debug, Clone)]
pub struct RefineReport {
    pub point: Point,
    pub residual: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub termination: Termination,
    pub descent_rate: Option<f64>,
    pub trace: RefineTrace,
}

impl RefineReport {
    /// True only when the run stopped because the residual reached exactly
    /// zero.
    ///
    /// A [`Termination::PrecisionFloor`] stop may leave the point numerically
    /// optimal, but it does not count as convergence here; callers wanting a
    /// looser policy can combine `residual` with `termination` themselves.
    pub fn converged(&self) -> bool {
        self.termination == Termination::ResidualZero
    }
}

//! Per-iteration diagnostics collected during a single refinement run.
//!
//! [`RefineTrace`] — three parallel histories
//! ├ `residuals`          : function value per iteration
//! ├ `step_magnitudes`    : normalized step size `|z| / |grad|` per applied step
//! └ `convergence_orders` : empirical order q, entries from iteration index >= 2

/// Diagnostic history of one refinement run.
///
/// `residuals[i]` belongs to iteration `i`. An iteration that stops at the
/// precision floor does not record its step magnitude, and
/// `convergence_orders` needs two earlier magnitudes, so the histories
/// shorten in that order. Buffers are allocated per call and handed back
/// with the report.
#[derive(Debug, Clone, Default)]
pub struct RefineTrace {
    residuals: Vec<f64>,
    step_magnitudes: Vec<f64>,
    convergence_orders: Vec<f64>,
}

impl RefineTrace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    pub fn step_magnitudes(&self) -> &[f64] {
        &self.step_magnitudes
    }

    pub fn convergence_orders(&self) -> &[f64] {
        &self.convergence_orders
    }

    pub(crate) fn record_residual(&mut self, z: f64) {
        self.residuals.push(z);
    }

    /// Records a normalized step magnitude and, once two earlier magnitudes
    /// exist, the empirical convergence order
    /// `q = ln|m[k] / m[k-1]| / ln|m[k-1] / m[k-2]|`
    /// (q ≈ 1 for linear convergence, q ≈ 2 for quadratic).
    pub(crate) fn record_step(&mut self, magnitude: f64) {
        self.step_magnitudes.push(magnitude);

        let n = self.step_magnitudes.len();
        if n >= 3 {
            let m = &self.step_magnitudes;
            let q = (m[n - 1] / m[n - 2]).abs().ln() / (m[n - 2] / m[n - 3]).abs().ln();
            self.convergence_orders.push(q);
        }
    }

    /// Log-residual decay over the last two iteration pairs:
    /// `max(ln z[k-1] - ln z[k], ln z[k-2] - ln z[k-1])`.
    ///
    /// `None` with fewer than three residuals; NaN when a contributing
    /// residual is non-positive. Purely diagnostic.
    pub fn descent_rate(&self) -> Option<f64> {
        let z = &self.residuals;
        let n = z.len();
        if n < 3 {
            return None;
        }

        let newer = z[n - 2].ln() - z[n - 1].ln();
        let older = z[n - 3].ln() - z[n - 2].ln();
        Some(newer.max(older))
    }
}

//! Refinement error types.
//!
//! ┌ [`ConfigError`] : invalid configuration values
//! │   ├ perturbation scale outside (0, 1)
//! │   ├ non-positive precision-floor ratio
//! │   └ zero iteration cap
//! │
//! └ [`RefineError`] : runtime failures of a refinement run
//!     ├ invalid initial guess
//!     ├ non-finite base or perturbed evaluation
//!     └ degenerate (zero) gradient estimate

use thiserror::Error;

/// Configuration validation errors, returned by the
/// [`RefineCfg`](super::config::RefineCfg) setters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid `perturbation`: must be finite and in (0, 1). got {got}")]
    InvalidPerturbation { got: f64 },

    #[error("invalid `floor_ratio`: must be finite and > 0. got {got}")]
    InvalidFloorRatio { got: f64 },

    #[error("invalid `max_iter`: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}

/// Failures that abort a refinement run.
///
/// The point keeps whatever coordinates were last written to it; an error
/// means those coordinates are not trustworthy.
#[derive(Debug, Error)]
pub enum RefineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid initial guess: ({x}, {y}) must be finite with non-zero coordinates")]
    InvalidGuess { x: f64, y: f64 },

    #[error("function non-finite at ({x}, {y}), f = {z}")]
    NonFiniteEvaluation { x: f64, y: f64, z: f64 },

    #[error("perturbed evaluation non-finite near ({x}, {y})")]
    NonFinitePerturbation { x: f64, y: f64 },

    #[error("gradient estimate vanishes at ({x}, {y}), f = {z}; newton step undefined")]
    DegenerateGradient { x: f64, y: f64, z: f64 },
}

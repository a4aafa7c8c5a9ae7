//! Configuration for the refinement loop.
//!
//! Provides [`RefineCfg`] with the default stopping constants, plus
//! validated builder setters.
//!
//! [`RefineCfg`] — tunable fields
//! ├ `perturbation` : relative finite-difference perturbation scale
//! ├ `floor_ratio`  : ULP-gap/step ratio marking a step below usable precision
//! └ `max_iter`     : iteration cap
//!
//! [`RefineCfg::new`] initializes configuration with default values.

use super::errors::ConfigError;

pub const DEFAULT_PERTURBATION: f64 = 1e-9;
pub const DEFAULT_FLOOR_RATIO: f64 = 0.01;
pub const DEFAULT_MAX_ITER: usize = 1200;

#[derive(Debug, Copy, Clone)]
pub struct RefineCfg {
    perturbation: f64,
    floor_ratio: f64,
    max_iter: usize,
}

impl RefineCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            perturbation: DEFAULT_PERTURBATION,
            floor_ratio: DEFAULT_FLOOR_RATIO,
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn perturbation(&self) -> f64 { self.perturbation }
    pub fn floor_ratio(&self) -> f64 { self.floor_ratio }
    pub fn max_iter(&self) -> usize { self.max_iter }

    // setters (validated)
    pub fn set_perturbation(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 || v >= 1.0 {
            return Err(ConfigError::InvalidPerturbation { got: v });
        }
        self.perturbation = v;
        Ok(self)
    }

    pub fn set_floor_ratio(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidFloorRatio { got: v });
        }
        self.floor_ratio = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}

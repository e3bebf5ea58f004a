//! Motion parameters for kinematic bodies

use helm_core::{HelmError, Result};
use serde::{Deserialize, Serialize};

/// How turn and speed increments relate to elapsed frame time
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotionMode {
    /// Fixed increments per simulated frame; `dt` is ignored, so apparent
    /// speed follows the achieved frame rate.
    #[default]
    PerFrame,
    /// Increments are scaled by `dt * reference_hz`. At `reference_hz`
    /// frames per second this matches `PerFrame`.
    DeltaScaled { reference_hz: f64 },
}

/// Turn rate and speed of a body, expressed per reference frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Degrees added to (left) or removed from (right) the heading per frame
    pub turn_rate_degrees: f64,
    /// Scene units travelled along the heading per frame
    pub speed: f64,
    pub mode: MotionMode,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            turn_rate_degrees: 5.0,
            speed: 5.0,
            mode: MotionMode::PerFrame,
        }
    }
}

impl MotionParams {
    pub fn new(turn_rate_degrees: f64, speed: f64) -> Self {
        Self {
            turn_rate_degrees,
            speed,
            mode: MotionMode::PerFrame,
        }
    }

    pub fn with_mode(mut self, mode: MotionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reject rates that would make the body state non-finite
    pub fn validate(&self) -> Result<()> {
        check_rate("turn_rate_degrees", self.turn_rate_degrees)?;
        check_rate("speed", self.speed)?;
        if let MotionMode::DeltaScaled { reference_hz } = self.mode {
            if !reference_hz.is_finite() || reference_hz <= 0.0 {
                return Err(HelmError::InvalidConfig(format!(
                    "reference_hz must be positive, got {reference_hz}"
                )));
            }
        }
        Ok(())
    }

    /// Multiplier applied to both increments for a frame lasting `dt` seconds
    pub fn step_scale(&self, dt: f64) -> f64 {
        match self.mode {
            MotionMode::PerFrame => 1.0,
            MotionMode::DeltaScaled { reference_hz } => dt * reference_hz,
        }
    }
}

fn check_rate(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(HelmError::InvalidConfig(format!(
            "{field} must be a finite non-negative number, got {value}"
        )));
    }
    Ok(())
}

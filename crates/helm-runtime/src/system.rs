//! Subsystem roles driven by the game loop

use crate::scene::Scene;
use helm_core::{ControlSignals, Result};

/// Samples this frame's control signals.
///
/// `initialize` runs once before the first frame and `shutdown` once after
/// the loop exits cleanly. Both default to no-ops.
pub trait InputProvider {
    fn sample(&mut self) -> Result<ControlSignals>;

    fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "input"
    }
}

/// Advances every simulated entity by one frame
pub trait Simulator {
    fn advance(&mut self, dt: f64, signals: &ControlSignals) -> Result<()>;

    /// Current simulated state
    fn scene(&self) -> &Scene;

    fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "simulator"
    }
}

/// Produces one visible frame from the simulated state.
/// Receives the scene by shared reference and cannot mutate it.
pub trait Presenter {
    fn present(&mut self, scene: &Scene) -> Result<()>;

    fn initialize(&mut self) -> Result<()> {
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "presenter"
    }
}

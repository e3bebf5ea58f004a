//! Contracts for the device and surface collaborators the loop drives through.
//!
//! Implementations wrap a window, a keyboard, or an offscreen buffer. None of
//! them may block: input is polled, never awaited.

use helm_core::{Color, ControlSignals, Result, Sprite, Vec2};

/// Raw state of the four steering controls plus a quit request
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub back: bool,
    /// Window closed or quit key held
    pub quit: bool,
}

impl From<ControlState> for ControlSignals {
    fn from(state: ControlState) -> Self {
        ControlSignals {
            turn_left: state.left,
            turn_right: state.right,
            throttle_forward: state.forward,
            throttle_reverse: state.back,
        }
    }
}

/// Polls the current state of the logical controls
pub trait InputSource {
    fn poll_state(&mut self) -> Result<ControlState>;
}

/// A surface that can be cleared and presented
pub trait Display {
    /// Fill the back buffer with `color`
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Make the most recent drawing visible
    fn present(&mut self) -> Result<()>;

    /// Release the surface after the last frame
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Draws entity visuals with an entity-local transform
pub trait Renderer {
    /// Draw `sprite` centered on `position`, rotated by `heading` degrees
    fn draw_oriented(&mut self, position: Vec2, heading: f64, sprite: &Sprite) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_state_maps_to_signals() {
        let state = ControlState {
            left: true,
            forward: true,
            quit: true,
            ..ControlState::default()
        };
        let signals = ControlSignals::from(state);
        assert!(signals.turn_left);
        assert!(signals.throttle_forward);
        assert!(!signals.turn_right);
        assert!(!signals.throttle_reverse);
    }
}

//! Per-frame control signals

use serde::{Deserialize, Serialize};

/// Discrete steering flags sampled once per frame.
///
/// Produced fresh by an input provider each frame and consumed by the
/// simulator; nothing carries over between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSignals {
    pub turn_left: bool,
    pub turn_right: bool,
    pub throttle_forward: bool,
    pub throttle_reverse: bool,
}

impl ControlSignals {
    pub const IDLE: Self = Self {
        turn_left: false,
        turn_right: false,
        throttle_forward: false,
        throttle_reverse: false,
    };

    pub fn forward() -> Self {
        Self {
            throttle_forward: true,
            ..Self::IDLE
        }
    }

    pub fn reverse() -> Self {
        Self {
            throttle_reverse: true,
            ..Self::IDLE
        }
    }

    pub fn left() -> Self {
        Self {
            turn_left: true,
            ..Self::IDLE
        }
    }

    pub fn right() -> Self {
        Self {
            turn_right: true,
            ..Self::IDLE
        }
    }

    /// True when no flag is set
    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert!(ControlSignals::default().is_idle());
        assert!(!ControlSignals::forward().is_idle());
    }

    #[test]
    fn test_constructors_set_single_flag() {
        let s = ControlSignals::left();
        assert!(s.turn_left && !s.turn_right && !s.throttle_forward && !s.throttle_reverse);
        let s = ControlSignals::reverse();
        assert!(s.throttle_reverse && !s.throttle_forward);
    }
}

//! Steerable body with position and heading

use crate::motion::MotionParams;
use helm_core::{ControlSignals, Sprite, Vec2};
use serde::{Deserialize, Serialize};

/// A positioned, oriented entity that turns and translates on discrete input.
///
/// `heading` is in degrees, counter-clockwise as seen on screen, and is never
/// normalized. Heading 0 faces +x; heading 90 faces up the screen (-y).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub position: Vec2,
    pub heading: f64,
    pub sprite: Sprite,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }
}

impl KinematicBody {
    pub fn new(position: Vec2, heading: f64) -> Self {
        Self {
            position,
            heading,
            sprite: Sprite::default(),
        }
    }

    /// Body at `(x, y)` facing +x
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(Vec2::new(x, y), 0.0)
    }

    pub fn with_heading(mut self, heading: f64) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_sprite(mut self, sprite: Sprite) -> Self {
        self.sprite = sprite;
        self
    }

    /// Unit vector along the heading, in screen coordinates
    pub fn forward(&self) -> Vec2 {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        Vec2::new(cos, -sin)
    }

    /// Advance one frame.
    ///
    /// Turning is applied before translation, so a frame that both turns and
    /// throttles moves along the new heading. Forward wins over reverse.
    pub fn apply(&mut self, signals: &ControlSignals, params: &MotionParams, dt: f64) {
        if signals.is_idle() {
            return;
        }

        let scale = params.step_scale(dt);
        let turn = params.turn_rate_degrees * scale;
        if signals.turn_left {
            self.heading += turn;
        }
        if signals.turn_right {
            self.heading -= turn;
        }

        let step = params.speed * scale;
        if signals.throttle_forward {
            self.position += self.forward() * step;
        } else if signals.throttle_reverse {
            self.position += self.forward() * -step;
        }

        tracing::trace!(
            x = self.position.x,
            y = self.position.y,
            heading = self.heading,
            "body advanced"
        );
    }
}

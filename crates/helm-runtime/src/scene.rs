//! Simulated state observed by presenters

use helm_core::Color;
use helm_kinematics::KinematicBody;

/// Everything a presenter needs to draw one frame
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub bodies: Vec<KinematicBody>,
    pub background: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            bodies: Vec::new(),
            background,
        }
    }

    pub fn with_body(mut self, body: KinematicBody) -> Self {
        self.bodies.push(body);
        self
    }
}

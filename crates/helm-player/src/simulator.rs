//! Default simulator: kinematic integration of every body in the scene

use helm_core::{ControlSignals, HelmError, Result};
use helm_kinematics::MotionParams;
use helm_runtime::{Scene, Simulator};

/// Applies the same control signals to every body each frame
pub struct KinematicSimulator {
    scene: Scene,
    params: MotionParams,
}

impl KinematicSimulator {
    pub fn new(scene: Scene, params: MotionParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { scene, params })
    }
}

impl Simulator for KinematicSimulator {
    fn advance(&mut self, dt: f64, signals: &ControlSignals) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(HelmError::Simulation(format!("invalid frame delta {dt}")));
        }
        for body in &mut self.scene.bodies {
            body.apply(signals, &self.params, dt);
        }
        Ok(())
    }

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn name(&self) -> &str {
        "kinematic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helm_core::Vec2;
    use helm_kinematics::KinematicBody;

    fn simulator() -> KinematicSimulator {
        let scene = Scene::default()
            .with_body(KinematicBody::at(400.0, 300.0))
            .with_body(KinematicBody::at(0.0, 0.0).with_heading(90.0));
        KinematicSimulator::new(scene, MotionParams::default()).unwrap()
    }

    #[test]
    fn advances_every_body() {
        let mut sim = simulator();
        sim.advance(1.0 / 60.0, &ControlSignals::forward()).unwrap();

        let scene = sim.scene();
        assert_eq!(scene.bodies[0].position, Vec2::new(405.0, 300.0));
        assert!(scene.bodies[1].position.x.abs() < 1e-9);
        assert!((scene.bodies[1].position.y + 5.0).abs() < 1e-9);
    }

    #[test]
    fn idle_signals_leave_scene_untouched() {
        let mut sim = simulator();
        let before = sim.scene().clone();
        sim.advance(0.5, &ControlSignals::IDLE).unwrap();
        assert_eq!(sim.scene(), &before);
    }

    #[test]
    fn rejects_bad_delta() {
        let mut sim = simulator();
        assert!(sim.advance(f64::NAN, &ControlSignals::IDLE).is_err());
        assert!(sim.advance(-0.1, &ControlSignals::IDLE).is_err());
    }

    #[test]
    fn rejects_invalid_params() {
        let result = KinematicSimulator::new(Scene::default(), MotionParams::new(-5.0, 5.0));
        assert!(matches!(result, Err(HelmError::InvalidConfig(_))));
    }
}

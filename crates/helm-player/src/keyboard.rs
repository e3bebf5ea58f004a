//! Default input provider

use helm_core::{ControlSignals, Result};
use helm_runtime::{InputProvider, InputSource, StopHandle};

/// Samples an [`InputSource`] once per frame and turns the result into
/// control signals. Holds no state between frames.
///
/// A reported quit stops the loop through the attached [`StopHandle`]; the
/// frame in progress still completes.
pub struct KeyboardInput {
    source: Box<dyn InputSource>,
    stop: Option<StopHandle>,
}

impl KeyboardInput {
    pub fn new(source: impl InputSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            stop: None,
        }
    }

    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = Some(stop);
        self
    }
}

impl InputProvider for KeyboardInput {
    fn sample(&mut self) -> Result<ControlSignals> {
        let state = self.source.poll_state()?;
        if state.quit {
            if let Some(stop) = &self.stop {
                if stop.is_running() {
                    tracing::info!("quit requested by input");
                }
                stop.stop();
            }
        }
        Ok(state.into())
    }

    fn name(&self) -> &str {
        "keyboard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helm_core::HelmError;
    use helm_runtime::ControlState;

    struct FixedSource(ControlState);

    impl InputSource for FixedSource {
        fn poll_state(&mut self) -> Result<ControlState> {
            Ok(self.0)
        }
    }

    struct BrokenSource;

    impl InputSource for BrokenSource {
        fn poll_state(&mut self) -> Result<ControlState> {
            Err(HelmError::Input("device unplugged".into()))
        }
    }

    #[test]
    fn maps_state_to_signals() {
        let mut input = KeyboardInput::new(FixedSource(ControlState {
            right: true,
            back: true,
            ..ControlState::default()
        }));
        let signals = input.sample().unwrap();
        assert!(signals.turn_right && signals.throttle_reverse);
        assert!(!signals.turn_left && !signals.throttle_forward);
    }

    #[test]
    fn sampling_twice_is_idempotent() {
        let mut input = KeyboardInput::new(FixedSource(ControlState {
            forward: true,
            ..ControlState::default()
        }));
        assert_eq!(input.sample().unwrap(), input.sample().unwrap());
    }

    #[test]
    fn quit_stops_loop_after_current_frame() {
        use crate::{KinematicSimulator, ScenePresenter, SoftwareSurface};
        use helm_kinematics::{KinematicBody, MotionParams};
        use helm_runtime::{LoopConfig, LoopController, Scene};

        let stop = StopHandle::new();
        let input = KeyboardInput::new(FixedSource(ControlState {
            forward: true,
            quit: true,
            ..ControlState::default()
        }))
        .with_stop_handle(stop.clone());
        let scene = Scene::default().with_body(KinematicBody::at(10.0, 10.0));

        let mut controller = LoopController::builder()
            .input(input)
            .simulator(KinematicSimulator::new(scene, MotionParams::default()).unwrap())
            .presenter(ScenePresenter::new(SoftwareSurface::new(32, 32).unwrap()))
            .config(LoopConfig::unpaced())
            .stop_handle(stop.clone())
            .build()
            .unwrap();

        let summary = controller.run().unwrap();
        assert_eq!(summary.frames, 1);
        assert!(!stop.is_running());
        // The quitting frame was still simulated
        assert_eq!(controller.scene().bodies[0].position.x, 15.0);
    }

    #[test]
    fn source_errors_propagate() {
        let mut input = KeyboardInput::new(BrokenSource);
        assert!(matches!(input.sample(), Err(HelmError::Input(_))));
    }
}

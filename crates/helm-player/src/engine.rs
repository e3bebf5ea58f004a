//! Composition root

use crate::config::EngineConfig;
use crate::keyboard::KeyboardInput;
use crate::presenter::ScenePresenter;
use crate::script::ScriptedSource;
use crate::simulator::KinematicSimulator;
use crate::surface::SoftwareSurface;
use helm_core::Result;
use helm_runtime::{LoopController, RunSummary, Scene, StopHandle};

/// Owns one fully wired [`LoopController`] and exposes start/stop to the
/// embedding application
pub struct Engine {
    controller: LoopController,
}

impl Engine {
    /// Build the default subsystems from `config` and wire them together
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let stop = StopHandle::new();

        let source = ScriptedSource::new(&config.input.script, config.input.quit_when_done)?
            .with_bindings(&config.input.bindings)?;
        let input = KeyboardInput::new(source).with_stop_handle(stop.clone());

        let scene = Scene::new(config.display.background_color()?)
            .with_body(config.body.to_body()?);
        let simulator = KinematicSimulator::new(scene, config.motion)?;

        let mut surface = SoftwareSurface::new(config.display.width, config.display.height)?;
        if let Some(path) = &config.display.screenshot {
            surface = surface.with_screenshot(path);
        }
        let presenter = ScenePresenter::new(surface);

        let controller = LoopController::builder()
            .input(input)
            .simulator(simulator)
            .presenter(presenter)
            .config(config.game_loop)
            .stop_handle(stop)
            .build()?;

        Ok(Self { controller })
    }

    /// Run the loop on the calling thread until stopped
    pub fn start(&mut self) -> Result<RunSummary> {
        self.controller.run()
    }

    /// Ask the loop to exit after its current frame
    pub fn stop(&self) {
        self.controller.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.controller.stop_handle()
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    pub fn scene(&self) -> &Scene {
        self.controller.scene()
    }
}

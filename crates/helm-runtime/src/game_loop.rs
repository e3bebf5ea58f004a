//! The game loop: sample input, advance simulation, present, pace.

use crate::clock::FrameClock;
use crate::config::{LoopConfig, Pacing};
use crate::scene::Scene;
use crate::stop::StopHandle;
use crate::system::{InputProvider, Presenter, Simulator};
use helm_core::{HelmError, Result};
use std::time::{Duration, Instant};

/// Outcome of a clean `run`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Frames that completed all steps
    pub frames: u64,
    /// Wall-clock time spent inside the loop
    pub elapsed: Duration,
}

impl RunSummary {
    /// Average achieved frame rate
    pub fn average_fps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

/// Orchestrates one input provider, one simulator, and one presenter.
///
/// Single-threaded: every frame runs sample → advance → present → pace on
/// the calling thread. Only the stop flag may be touched from elsewhere.
pub struct LoopController {
    input: Box<dyn InputProvider>,
    simulator: Box<dyn Simulator>,
    presenter: Box<dyn Presenter>,
    clock: FrameClock,
    pacing: Pacing,
    max_frames: Option<u64>,
    max_duration: Option<Duration>,
    stop: StopHandle,
}

impl LoopController {
    pub fn builder() -> LoopControllerBuilder {
        LoopControllerBuilder::default()
    }

    /// Run frames until stopped. Blocks the calling thread.
    ///
    /// The first subsystem error ends the run and is returned as is; the
    /// failed frame is not retried and `shutdown` hooks are skipped.
    pub fn run(&mut self) -> Result<RunSummary> {
        let _span = tracing::info_span!("game_loop").entered();

        let result = self.run_inner();
        if let Err(err) = &result {
            self.stop.stop();
            tracing::error!(error = %err, frame = self.clock.frame_count, "game loop failed");
        }
        result
    }

    fn run_inner(&mut self) -> Result<RunSummary> {
        // Armed before the hooks so a stop issued from here on is honored
        self.stop.arm();

        self.input.initialize()?;
        self.simulator.initialize()?;
        self.presenter.initialize()?;

        let started = Instant::now();
        self.clock.start_at(started);
        tracing::info!(
            input = self.input.name(),
            simulator = self.simulator.name(),
            presenter = self.presenter.name(),
            pacing = ?self.pacing,
            "game loop started"
        );

        let mut frames = 0u64;
        while self.stop.is_running() {
            let frames_done = self.max_frames.is_some_and(|max| frames >= max);
            let time_up = self
                .max_duration
                .is_some_and(|max| started.elapsed() >= max);
            if frames_done || time_up {
                tracing::debug!(frames, time_up, "run limit reached");
                self.stop.stop();
                break;
            }

            let frame_started = Instant::now();
            let dt = self.clock.tick_at(frame_started);

            let signals = self.input.sample()?;
            self.simulator.advance(dt, &signals)?;
            self.presenter.present(self.simulator.scene())?;
            frames += 1;
            tracing::debug!(frame = frames, dt, ?signals, "frame complete");

            self.pacing.wait(frame_started);
        }

        self.input.shutdown()?;
        self.simulator.shutdown()?;
        self.presenter.shutdown()?;

        let summary = RunSummary {
            frames,
            elapsed: started.elapsed(),
        };
        tracing::info!(
            frames = summary.frames,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            fps = summary.average_fps(),
            "game loop stopped"
        );
        Ok(summary)
    }

    /// Ask the loop to exit after the current frame. Never blocks.
    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_running(&self) -> bool {
        self.stop.is_running()
    }

    /// Handle for stopping the loop from other threads or subsystems
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Current simulated state
    pub fn scene(&self) -> &Scene {
        self.simulator.scene()
    }
}

/// Collects subsystems and settings for a [`LoopController`]
#[derive(Default)]
pub struct LoopControllerBuilder {
    input: Option<Box<dyn InputProvider>>,
    simulator: Option<Box<dyn Simulator>>,
    presenter: Option<Box<dyn Presenter>>,
    config: LoopConfig,
    stop: Option<StopHandle>,
}

impl LoopControllerBuilder {
    pub fn input(self, input: impl InputProvider + 'static) -> Self {
        self.boxed_input(Box::new(input))
    }

    pub fn boxed_input(mut self, input: Box<dyn InputProvider>) -> Self {
        self.input = Some(input);
        self
    }

    pub fn simulator(self, simulator: impl Simulator + 'static) -> Self {
        self.boxed_simulator(Box::new(simulator))
    }

    pub fn boxed_simulator(mut self, simulator: Box<dyn Simulator>) -> Self {
        self.simulator = Some(simulator);
        self
    }

    pub fn presenter(self, presenter: impl Presenter + 'static) -> Self {
        self.boxed_presenter(Box::new(presenter))
    }

    pub fn boxed_presenter(mut self, presenter: Box<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn config(mut self, config: LoopConfig) -> Self {
        self.config = config;
        self
    }

    /// Share an existing stop flag, e.g. one already handed to a subsystem
    pub fn stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Validate the wiring. Fails before any subsystem is touched.
    pub fn build(self) -> Result<LoopController> {
        let input = self.input.ok_or(HelmError::MissingSubsystem("input"))?;
        let simulator = self
            .simulator
            .ok_or(HelmError::MissingSubsystem("simulator"))?;
        let presenter = self
            .presenter
            .ok_or(HelmError::MissingSubsystem("presenter"))?;
        self.config.validate()?;

        let clock = match self.config.max_delta_seconds {
            Some(max) => FrameClock::with_max_delta(max),
            None => FrameClock::new(),
        };

        Ok(LoopController {
            input,
            simulator,
            presenter,
            clock,
            pacing: self.config.pacing(),
            max_frames: self.config.max_frames,
            max_duration: self.config.max_duration(),
            stop: self.stop.unwrap_or_default(),
        })
    }
}

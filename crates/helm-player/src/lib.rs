//! Helm Player - default subsystems and the composition root
//!
//! - `Engine` - wires one input provider, simulator, and presenter into a loop
//! - `KeyboardInput` - input provider over any `InputSource`
//! - `ScriptedSource` - replays timed key presses, for headless runs
//! - `KinematicSimulator` - advances every body in the scene
//! - `ScenePresenter` - clears, draws each body oriented, presents
//! - `SoftwareSurface` - offscreen RGBA display with PNG capture

pub mod config;
mod engine;
mod keyboard;
mod presenter;
mod script;
mod simulator;
mod surface;

pub use config::{BodyConfig, DisplayConfig, EngineConfig, InputConfig};
pub use engine::Engine;
pub use keyboard::KeyboardInput;
pub use presenter::ScenePresenter;
pub use script::{ScriptStep, ScriptedSource};
pub use simulator::KinematicSimulator;
pub use surface::SoftwareSurface;

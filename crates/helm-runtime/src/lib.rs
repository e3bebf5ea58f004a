//! Helm Runtime - Game loop infrastructure
//!
//! Provides the game loop and the roles it orchestrates:
//! - `LoopController` - runs sample → advance → present → pace until stopped
//! - `InputProvider` / `Simulator` / `Presenter` - pluggable subsystem roles
//! - `InputSource` / `Display` / `Renderer` - device and surface contracts
//! - `FrameClock` - wall-clock delta between frames
//! - `InputState` - held-key tracking with action bindings
//! - `StopHandle` - cooperative, thread-safe stop flag

mod clock;
mod config;
mod device;
mod game_loop;
mod input;
mod scene;
mod stop;
mod system;

pub use clock::FrameClock;
pub use config::{LoopConfig, Pacing, PacingMode};
pub use device::{ControlState, Display, InputSource, Renderer};
pub use game_loop::{LoopController, LoopControllerBuilder, RunSummary};
pub use input::{parse_key_code, InputState};
pub use scene::Scene;
pub use stop::StopHandle;
pub use system::{InputProvider, Presenter, Simulator};

//! Helm Kinematics - steerable bodies driven by per-frame control signals
//!
//! - `KinematicBody` - a positioned, oriented entity (heading in degrees)
//! - `MotionParams` - turn rate, speed, and how they relate to frame time
//! - `MotionMode` - per-frame constant increments or delta-time scaled ones

mod body;
mod motion;

pub use body::KinematicBody;
pub use motion::{MotionMode, MotionParams};

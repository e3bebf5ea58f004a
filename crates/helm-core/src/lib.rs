//! Helm Core - Foundational types for the Helm game loop
//!
//! This crate provides the types that all other Helm crates depend on:
//! - `Vec2` - Screen-space coordinates
//! - `Color`, `Sprite` - Visual description of an entity
//! - `ControlSignals` - Per-frame steering input
//! - Error types and Result alias

mod control;
mod error;
mod types;

pub use control::ControlSignals;
pub use error::{HelmError, Result};
pub use types::{Color, Sprite, Vec2};

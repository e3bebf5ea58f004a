//! Scripted input source replaying timed key presses

use helm_core::{HelmError, Result};
use helm_runtime::{parse_key_code, ControlState, InputSource, InputState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Hold `keys` for `frames` consecutive frames
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frames: u32,
    #[serde(default)]
    pub keys: Vec<String>,
}

impl ScriptStep {
    pub fn new(frames: u32, keys: &[&str]) -> Self {
        Self {
            frames,
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// Drive forward, circle left, then back up
    pub fn demo() -> Vec<Self> {
        vec![
            Self::new(60, &["ArrowUp"]),
            Self::new(36, &["ArrowUp", "ArrowLeft"]),
            Self::new(20, &[]),
            Self::new(30, &["ArrowDown"]),
        ]
    }
}

struct ResolvedStep {
    frames: u32,
    keys: Vec<KeyCode>,
}

/// Feeds a fixed key script through an [`InputState`].
///
/// Once the script is exhausted every key is released and, if
/// `quit_when_done` is set, a quit is reported on every later poll.
pub struct ScriptedSource {
    steps: Vec<ResolvedStep>,
    cursor: usize,
    frames_left: u32,
    step_active: bool,
    held: Vec<KeyCode>,
    state: InputState,
    quit_when_done: bool,
}

impl ScriptedSource {
    pub fn new(steps: &[ScriptStep], quit_when_done: bool) -> Result<Self> {
        let steps = steps
            .iter()
            .map(|step| {
                let keys = step
                    .keys
                    .iter()
                    .map(|name| {
                        parse_key_code(name).ok_or_else(|| {
                            HelmError::InvalidConfig(format!("unknown key '{name}' in input script"))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ResolvedStep {
                    frames: step.frames,
                    keys,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            steps,
            cursor: 0,
            frames_left: 0,
            step_active: false,
            held: Vec::new(),
            state: InputState::new(),
            quit_when_done,
        })
    }

    /// Override action bindings by key name
    pub fn with_bindings(mut self, bindings: &HashMap<String, Vec<String>>) -> Result<Self> {
        self.state.bind_named(bindings)?;
        Ok(self)
    }

    /// Release keys no longer held and press the new ones
    fn hold(&mut self, keys: &[KeyCode]) {
        let previous = std::mem::replace(&mut self.held, keys.to_vec());
        for key in previous.iter().filter(|key| !keys.contains(*key)) {
            self.state.process_key_up(*key);
        }
        for key in keys {
            self.state.process_key_down(*key);
        }
    }
}

impl InputSource for ScriptedSource {
    fn poll_state(&mut self) -> Result<ControlState> {
        while let Some(step) = self.steps.get(self.cursor) {
            if !self.step_active {
                let (frames, keys) = (step.frames, step.keys.clone());
                self.hold(&keys);
                self.frames_left = frames;
                self.step_active = true;
            }

            if self.frames_left > 0 {
                self.frames_left -= 1;
                let snapshot = self.state.control_state();
                if self.frames_left == 0 {
                    self.cursor += 1;
                    self.step_active = false;
                }
                return Ok(snapshot);
            }

            // zero-length step
            self.cursor += 1;
            self.step_active = false;
        }

        self.hold(&[]);
        Ok(ControlState {
            quit: self.quit_when_done,
            ..ControlState::default()
        })
    }
}

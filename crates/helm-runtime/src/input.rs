//! Keyboard state and action bindings

use crate::device::ControlState;
use helm_core::{HelmError, Result};
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

pub const ACTION_TURN_LEFT: &str = "turn_left";
pub const ACTION_TURN_RIGHT: &str = "turn_right";
pub const ACTION_FORWARD: &str = "forward";
pub const ACTION_BACK: &str = "back";
pub const ACTION_QUIT: &str = "quit";

/// Tracks held keys and maps them to named actions
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Action map: action name -> list of key bindings
    action_map: HashMap<String, Vec<KeyCode>>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            action_map: Self::default_action_map(),
        }
    }

    fn default_action_map() -> HashMap<String, Vec<KeyCode>> {
        let mut map = HashMap::new();
        map.insert(
            ACTION_TURN_LEFT.into(),
            vec![KeyCode::ArrowLeft, KeyCode::KeyA],
        );
        map.insert(
            ACTION_TURN_RIGHT.into(),
            vec![KeyCode::ArrowRight, KeyCode::KeyD],
        );
        map.insert(ACTION_FORWARD.into(), vec![KeyCode::ArrowUp, KeyCode::KeyW]);
        map.insert(ACTION_BACK.into(), vec![KeyCode::ArrowDown, KeyCode::KeyS]);
        map.insert(ACTION_QUIT.into(), vec![KeyCode::Escape]);
        map
    }

    /// Bind an action to one or more keys, replacing previous bindings
    pub fn bind_action(&mut self, action: impl Into<String>, keys: Vec<KeyCode>) {
        self.action_map.insert(action.into(), keys);
    }

    /// Bind actions from key names such as `"ArrowUp"` or `"W"`
    pub fn bind_named(&mut self, bindings: &HashMap<String, Vec<String>>) -> Result<()> {
        for (action, names) in bindings {
            let keys = names
                .iter()
                .map(|name| {
                    parse_key_code(name).ok_or_else(|| {
                        HelmError::InvalidConfig(format!(
                            "unknown key '{name}' bound to action '{action}'"
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            self.bind_action(action.as_str(), keys);
        }
        Ok(())
    }

    /// Process a key press event. Repeats while held are ignored.
    pub fn process_key_down(&mut self, key: KeyCode) {
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Is an action currently held? (any bound key is down)
    pub fn is_action_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_down.contains(k)))
            .unwrap_or(false)
    }

    /// Snapshot of the steering controls
    pub fn control_state(&self) -> ControlState {
        ControlState {
            left: self.is_action_pressed(ACTION_TURN_LEFT),
            right: self.is_action_pressed(ACTION_TURN_RIGHT),
            forward: self.is_action_pressed(ACTION_FORWARD),
            back: self.is_action_pressed(ACTION_BACK),
            quit: self.is_action_pressed(ACTION_QUIT),
        }
    }
}

/// Parse a key name into a winit key code.
///
/// Accepts winit names (`"KeyW"`, `"ArrowUp"`, `"Digit1"`) and the short
/// forms `"W"`, `"Up"`, `"1"`. Case-insensitive.
pub fn parse_key_code(name: &str) -> Option<KeyCode> {
    let lower = name.trim().to_ascii_lowercase();
    let short = lower
        .strip_prefix("key")
        .filter(|rest| rest.len() == 1)
        .or_else(|| lower.strip_prefix("digit"))
        .unwrap_or(lower.as_str());

    let code = match short {
        "a" => KeyCode::KeyA,
        "b" => KeyCode::KeyB,
        "c" => KeyCode::KeyC,
        "d" => KeyCode::KeyD,
        "e" => KeyCode::KeyE,
        "f" => KeyCode::KeyF,
        "g" => KeyCode::KeyG,
        "h" => KeyCode::KeyH,
        "i" => KeyCode::KeyI,
        "j" => KeyCode::KeyJ,
        "k" => KeyCode::KeyK,
        "l" => KeyCode::KeyL,
        "m" => KeyCode::KeyM,
        "n" => KeyCode::KeyN,
        "o" => KeyCode::KeyO,
        "p" => KeyCode::KeyP,
        "q" => KeyCode::KeyQ,
        "r" => KeyCode::KeyR,
        "s" => KeyCode::KeyS,
        "t" => KeyCode::KeyT,
        "u" => KeyCode::KeyU,
        "v" => KeyCode::KeyV,
        "w" => KeyCode::KeyW,
        "x" => KeyCode::KeyX,
        "y" => KeyCode::KeyY,
        "z" => KeyCode::KeyZ,
        "0" => KeyCode::Digit0,
        "1" => KeyCode::Digit1,
        "2" => KeyCode::Digit2,
        "3" => KeyCode::Digit3,
        "4" => KeyCode::Digit4,
        "5" => KeyCode::Digit5,
        "6" => KeyCode::Digit6,
        "7" => KeyCode::Digit7,
        "8" => KeyCode::Digit8,
        "9" => KeyCode::Digit9,
        "up" | "arrowup" => KeyCode::ArrowUp,
        "down" | "arrowdown" => KeyCode::ArrowDown,
        "left" | "arrowleft" => KeyCode::ArrowLeft,
        "right" | "arrowright" => KeyCode::ArrowRight,
        "space" => KeyCode::Space,
        "escape" | "esc" => KeyCode::Escape,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "shift" | "shiftleft" => KeyCode::ShiftLeft,
        "shiftright" => KeyCode::ShiftRight,
        "control" | "ctrl" | "controlleft" => KeyCode::ControlLeft,
        "controlright" => KeyCode::ControlRight,
        "alt" | "altleft" => KeyCode::AltLeft,
        "altright" => KeyCode::AltRight,
        _ => return None,
    };
    Some(code)
}

//! Engine configuration loaded from TOML
//!
//! Every section and field is optional; the defaults reproduce the parking
//! demo: an 800x600 white surface with a red 50x30 car at its center.

use crate::script::ScriptStep;
use helm_core::{Color, HelmError, Result, Sprite, Vec2};
use helm_kinematics::{KinematicBody, MotionParams};
use helm_runtime::LoopConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Top-level engine configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    #[serde(rename = "loop")]
    pub game_loop: LoopConfig,
    pub motion: MotionParams,
    pub body: BodyConfig,
    pub display: DisplayConfig,
    pub input: InputConfig,
}

/// Initial state of the steerable body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub x: f64,
    pub y: f64,
    /// Degrees, counter-clockwise on screen
    pub heading: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            x: 400.0,
            y: 300.0,
            heading: 0.0,
            width: 50.0,
            height: 30.0,
            color: "#ff0000".into(),
        }
    }
}

impl BodyConfig {
    pub fn to_body(&self) -> Result<KinematicBody> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("heading", self.heading),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(HelmError::InvalidConfig(format!(
                    "body.{field} must be finite, got {value}"
                )));
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(HelmError::InvalidConfig(
                "body sprite size must not be negative".into(),
            ));
        }

        let sprite = Sprite::new(self.width, self.height, Color::parse_hex(&self.color)?);
        Ok(KinematicBody::new(Vec2::new(self.x, self.y), self.heading).with_sprite(sprite))
    }
}

/// Output surface settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
    /// Save the last presented frame here as PNG when the loop stops
    pub screenshot: Option<PathBuf>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: "#ffffff".into(),
            screenshot: None,
        }
    }
}

impl DisplayConfig {
    pub fn background_color(&self) -> Result<Color> {
        Color::parse_hex(&self.background)
    }
}

/// Scripted input and key bindings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub script: Vec<ScriptStep>,
    /// Request a stop once the script has been replayed
    pub quit_when_done: bool,
    /// Action name -> key names, replacing the default bindings for that action
    pub bindings: HashMap<String, Vec<String>>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            script: ScriptStep::demo(),
            quit_when_done: true,
            bindings: HashMap::new(),
        }
    }
}

impl EngineConfig {
    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.game_loop.validate()?;
        self.motion.validate()?;
        self.body.to_body()?;
        self.display.background_color()?;
        if self.display.width == 0 || self.display.height == 0 {
            return Err(HelmError::InvalidConfig(format!(
                "display size {}x{} must be non-zero",
                self.display.width, self.display.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helm_kinematics::MotionMode;
    use helm_runtime::PacingMode;

    #[test]
    fn defaults_match_demo() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());

        let body = config.body.to_body().unwrap();
        assert_eq!(body.position, Vec2::new(400.0, 300.0));
        assert_eq!(body.heading, 0.0);
        assert_eq!(body.sprite, Sprite::default());

        assert_eq!((config.display.width, config.display.height), (800, 600));
        assert_eq!(config.display.background_color().unwrap(), Color::WHITE);
        assert_eq!(config.game_loop.target_fps, 60.0);
        assert!(config.input.quit_when_done);
        assert!(!config.input.script.is_empty());
    }

    #[test]
    fn empty_document_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn parses_full_document() {
        let config = EngineConfig::from_toml_str(
            r##"
            [loop]
            target_fps = 30
            pacing = "unpaced"
            max_frames = 90

            [motion]
            turn_rate_degrees = 3.0
            speed = 2.5
            mode = { kind = "delta_scaled", reference_hz = 30.0 }

            [body]
            x = 10.0
            y = 20.0
            heading = 45.0
            color = "#00ff00"

            [display]
            width = 320
            height = 240
            background = "#000000"
            screenshot = "out.png"

            [input]
            quit_when_done = false
            script = [
                { frames = 10, keys = ["Up"] },
                { frames = 5 },
            ]

            [input.bindings]
            quit = ["Q"]
            "##,
        )
        .unwrap();

        assert_eq!(config.game_loop.target_fps, 30.0);
        assert_eq!(config.game_loop.pacing, PacingMode::Unpaced);
        assert_eq!(config.game_loop.max_frames, Some(90));
        assert_eq!(config.motion.speed, 2.5);
        assert_eq!(
            config.motion.mode,
            MotionMode::DeltaScaled { reference_hz: 30.0 }
        );
        assert_eq!(config.body.heading, 45.0);
        assert_eq!(config.body.width, 50.0);
        assert_eq!(config.display.screenshot, Some(PathBuf::from("out.png")));
        assert_eq!(config.input.script.len(), 2);
        assert!(config.input.script[1].keys.is_empty());
        assert_eq!(config.input.bindings["quit"], vec!["Q".to_string()]);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            EngineConfig::from_toml_str("[loop]\ntarget_fps = 0"),
            Err(HelmError::InvalidConfig(_))
        ));
        assert!(EngineConfig::from_toml_str("[display]\nwidth = 0").is_err());
        assert!(EngineConfig::from_toml_str("[body]\ncolor = \"red\"").is_err());
        assert!(EngineConfig::from_toml_str("[motion]\nspeed = -1.0").is_err());
    }

    #[test]
    fn reports_parse_errors() {
        assert!(matches!(
            EngineConfig::from_toml_str("[loop\n"),
            Err(HelmError::TomlParse(_))
        ));
    }

    #[test]
    fn demo_config_parses() {
        let config =
            EngineConfig::from_toml_str(include_str!("../../../demos/parking.toml")).unwrap();
        assert_eq!(config.input.script, ScriptStep::demo());
        assert_eq!(config.motion, MotionParams::default());
    }

    #[test]
    fn load_from_file() {
        let dir = std::env::temp_dir().join("helm_config_test");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("helm.toml");
        std::fs::write(&path, "[body]\nx = 1.0\ny = 2.0\n").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.body.x, 1.0);
        assert_eq!(config.body.y, 2.0);

        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            EngineConfig::load(dir.join("missing.toml")),
            Err(HelmError::Io(_))
        ));
    }
}

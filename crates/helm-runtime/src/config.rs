//! Loop timing configuration and frame pacing

use helm_core::{HelmError, Result};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// How the loop waits after each frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PacingMode {
    /// Sleep a full frame interval after every frame
    #[default]
    FixedSleep,
    /// Sleep only what is left of the frame interval
    FrameCap,
    /// Do not wait at all
    Unpaced,
}

/// Resolved pacing strategy. A floor on the wait, never a cadence guarantee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    FixedSleep(Duration),
    FrameCap(Duration),
    Unpaced,
}

impl Pacing {
    /// Block the calling thread according to the strategy.
    /// `frame_started` is when the current frame began.
    pub fn wait(&self, frame_started: Instant) {
        match *self {
            Pacing::FixedSleep(interval) => std::thread::sleep(interval),
            Pacing::FrameCap(interval) => {
                if let Some(remaining) = interval.checked_sub(frame_started.elapsed()) {
                    std::thread::sleep(remaining);
                }
            }
            Pacing::Unpaced => {}
        }
    }
}

/// Game loop settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Target frame rate used to derive the pacing interval
    pub target_fps: f64,
    pub pacing: PacingMode,
    /// Stop cooperatively after this many completed frames
    pub max_frames: Option<u64>,
    /// Stop cooperatively once this much wall-clock time has passed since
    /// the loop started; checked between frames
    pub max_seconds: Option<f64>,
    /// Clamp for a single frame delta, in seconds
    pub max_delta_seconds: Option<f64>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            pacing: PacingMode::FixedSleep,
            max_frames: None,
            max_seconds: None,
            max_delta_seconds: None,
        }
    }
}

impl LoopConfig {
    /// Unpaced loop, mostly useful for tests and batch runs
    pub fn unpaced() -> Self {
        Self {
            pacing: PacingMode::Unpaced,
            ..Self::default()
        }
    }

    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    pub fn with_max_seconds(mut self, seconds: f64) -> Self {
        self.max_seconds = Some(seconds);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.target_fps.is_finite() || self.target_fps <= 0.0 {
            return Err(HelmError::InvalidConfig(format!(
                "target_fps must be positive, got {}",
                self.target_fps
            )));
        }
        if let Some(secs) = self.max_seconds {
            if !secs.is_finite() || secs < 0.0 {
                return Err(HelmError::InvalidConfig(format!(
                    "max_seconds must be a non-negative number, got {secs}"
                )));
            }
        }
        if let Some(max) = self.max_delta_seconds {
            if !max.is_finite() || max <= 0.0 {
                return Err(HelmError::InvalidConfig(format!(
                    "max_delta_seconds must be positive, got {max}"
                )));
            }
        }
        Ok(())
    }

    /// Wall-clock budget for a run, if any
    pub fn max_duration(&self) -> Option<Duration> {
        self.max_seconds.map(Duration::from_secs_f64)
    }

    /// Nominal time per frame
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps)
    }

    pub fn pacing(&self) -> Pacing {
        match self.pacing {
            PacingMode::FixedSleep => Pacing::FixedSleep(self.frame_interval()),
            PacingMode::FrameCap => Pacing::FrameCap(self.frame_interval()),
            PacingMode::Unpaced => Pacing::Unpaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoopConfig::default();
        assert_eq!(config.target_fps, 60.0);
        assert_eq!(config.pacing, PacingMode::FixedSleep);
        assert!(config.max_frames.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_frame_interval() {
        let config = LoopConfig::default();
        let interval = config.frame_interval().as_secs_f64();
        assert!((interval - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(config.pacing(), Pacing::FixedSleep(config.frame_interval()));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = LoopConfig::default();
        config.target_fps = 0.0;
        assert!(config.validate().is_err());

        let mut config = LoopConfig::default();
        config.max_delta_seconds = Some(-0.1);
        assert!(config.validate().is_err());

        assert!(LoopConfig::default().with_max_seconds(-1.0).validate().is_err());
        assert!(LoopConfig::default()
            .with_max_seconds(f64::NAN)
            .validate()
            .is_err());
        assert!(LoopConfig::default().with_max_seconds(0.0).validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LoopConfig = toml::from_str(
            r#"
            pacing = "frame_cap"
            max_frames = 10
            max_seconds = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(config.pacing, PacingMode::FrameCap);
        assert_eq!(config.max_frames, Some(10));
        assert_eq!(config.max_duration(), Some(Duration::from_millis(2500)));
        assert_eq!(config.target_fps, 60.0);
    }

    #[test]
    fn test_frame_cap_skips_sleep_when_late() {
        let pacing = Pacing::FrameCap(Duration::from_millis(5));
        let started = Instant::now() - Duration::from_millis(50);
        let before = Instant::now();
        pacing.wait(started);
        assert!(before.elapsed() < Duration::from_millis(5));
    }

    #[test]
    fn test_fixed_sleep_waits_at_least_interval() {
        let pacing = Pacing::FixedSleep(Duration::from_millis(2));
        let before = Instant::now();
        pacing.wait(before);
        assert!(before.elapsed() >= Duration::from_millis(2));
    }
}

//! Offscreen software surface

use helm_core::{Color, HelmError, Result, Sprite, Vec2};
use helm_runtime::{Display, Renderer};
use std::path::{Path, PathBuf};

const MAX_DIMENSION: u32 = 16384;

/// Headless RGBA display with a back buffer for drawing and a front buffer
/// holding the last presented frame
pub struct SoftwareSurface {
    width: u32,
    height: u32,
    back: Vec<u8>,
    front: Vec<u8>,
    frames_presented: u64,
    screenshot: Option<PathBuf>,
}

impl SoftwareSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(HelmError::InvalidConfig(format!(
                "surface size {width}x{height} must be between 1 and {MAX_DIMENSION}"
            )));
        }
        let len = width as usize * height as usize * 4;
        Ok(Self {
            width,
            height,
            back: vec![0; len],
            front: vec![0; len],
            frames_presented: 0,
            screenshot: None,
        })
    }

    /// Write the last presented frame to `path` as PNG on close
    pub fn with_screenshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.screenshot = Some(path.into());
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Pixel of the last presented frame
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.front[i..i + 4]);
        Some(px)
    }

    /// Save the last presented frame as PNG
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.front.clone())
            .ok_or_else(|| HelmError::Image("frame buffer size mismatch".into()))?;
        img.save(path)
            .map_err(|e| HelmError::Image(format!("failed to save {}: {e}", path.display())))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl Display for SoftwareSurface {
    fn clear(&mut self, color: Color) -> Result<()> {
        let rgba = color.to_rgba8();
        for px in self.back.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.front.copy_from_slice(&self.back);
        self.frames_presented += 1;
        tracing::trace!(frame = self.frames_presented, "surface presented");
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(path) = &self.screenshot {
            self.save_png(path)?;
            tracing::info!(path = %path.display(), frame = self.frames_presented, "saved screenshot");
        }
        Ok(())
    }
}

impl Renderer for SoftwareSurface {
    /// Fill the sprite rectangle rotated by `heading` around its center.
    /// Pixels are sampled at their centers; no blending.
    fn draw_oriented(&mut self, position: Vec2, heading: f64, sprite: &Sprite) -> Result<()> {
        if !position.x.is_finite() || !position.y.is_finite() || !heading.is_finite() {
            return Err(HelmError::Presentation(format!(
                "cannot draw at ({}, {}) heading {heading}",
                position.x, position.y
            )));
        }

        let half_w = sprite.width / 2.0;
        let half_h = sprite.height / 2.0;
        let radius = (half_w * half_w + half_h * half_h).sqrt();

        let min_x = (position.x - radius).floor().max(0.0);
        let max_x = (position.x + radius).ceil().min(self.width as f64);
        let min_y = (position.y - radius).floor().max(0.0);
        let max_y = (position.y + radius).ceil().min(self.height as f64);
        if min_x >= max_x || min_y >= max_y {
            return Ok(());
        }

        let rgba = sprite.color.to_rgba8();
        for y in min_y as u32..max_y as u32 {
            for x in min_x as u32..max_x as u32 {
                let center = Vec2::new(x as f64 + 0.5, y as f64 + 0.5);
                let local = (center - position).rotated_screen(-heading);
                if local.x.abs() <= half_w && local.y.abs() <= half_h {
                    let i = self.index(x, y);
                    self.back[i..i + 4].copy_from_slice(&rgba);
                }
            }
        }
        tracing::trace!(x = position.x, y = position.y, heading, "sprite drawn");
        Ok(())
    }
}

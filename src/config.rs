//! Fixed configuration for the stance overlay
//!
//! Every value here is a compile-time constant exposed as an immutable
//! struct so layout, drawing and saving receive it explicitly.

use std::path::PathBuf;

use tiny_skia::LineJoin;

/// Where the overlay is written, relative to the working directory
pub const OUTPUT_PATH: &str = "assets/overlays/stance_overlay.png";

/// Shared stroke parameters applied to every primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Straight (non-premultiplied) RGBA color
    pub color: [u8; 4],
    /// Line width in pixels
    pub width: f32,
    pub join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        // Translucent white
        Self {
            color: [255, 255, 255, 220],
            width: 5.0,
            join: LineJoin::Round,
        }
    }
}

/// Canvas size, body proportions and glyph sizes for the two stances
#[derive(Debug, Clone, PartialEq)]
pub struct StanceConfig {
    pub width: u32,
    pub height: u32,
    /// Vertical position of the shared anchor as a fraction of the height
    pub anchor_ratio: f64,
    /// Horizontal span between the two figures
    pub base_width: i32,
    pub body_h: i32,
    pub leg_h: i32,
    pub head_r: i32,
    pub ball_r: i32,
    pub arrow_len: i32,
    /// Chevron endpoint offset from the arrow tip (horizontal, vertical)
    pub chevron: (i32, i32),
    pub stroke: StrokeStyle,
    pub output_path: PathBuf,
}

impl Default for StanceConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 900,
            anchor_ratio: 0.65,
            base_width: 280,
            body_h: 190,
            leg_h: 170,
            head_r: 26,
            ball_r: 55,
            arrow_len: 60,
            chevron: (15, 20),
            stroke: StrokeStyle::default(),
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl StanceConfig {
    /// Same geometry, saved under `base` instead of the working directory
    #[cfg(test)]
    pub fn rooted_at(&self, base: impl Into<PathBuf>) -> Self {
        Self {
            output_path: base.into().join(&self.output_path),
            ..self.clone()
        }
    }
}

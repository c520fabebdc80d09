//! Shared geometry calculations for overlay strokes

/// Outline geometry constants
pub mod shape {
    /// Ellipse bezier approximation constant: 4/3 * (sqrt(2) - 1)
    pub const BEZIER_K: f32 = 0.552_284_8;
}

/// Radius of the stroke centre line for an outlined circle whose ink must
/// stay within the bounding box `[c - r, c + r]`
#[inline]
pub fn inset_radius(radius: f32, stroke_width: f32) -> f32 {
    (radius - stroke_width * 0.5).max(0.5)
}

//! Integer points and canvas dimensions for the overlay layout

/// A pixel coordinate on the canvas
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate the point by the given offset
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Reflect the point about the vertical line `x = axis_x2 / 2`
    pub fn mirrored(self, axis_x2: i32) -> Self {
        Self {
            x: axis_x2 - self.x,
            y: self.y,
        }
    }

    /// Convert to floating point canvas coordinates
    pub fn to_f32(self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }
}

/// Fixed canvas dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Shared anchor of both figures: horizontally centred, `ratio` of the way down
    pub fn anchor(&self, ratio: f64) -> Point {
        Point::new((self.width / 2) as i32, scaled(self.height as i32, ratio))
    }
}

/// Scale `value` by `ratio`, truncating toward zero
#[inline]
pub fn scaled(value: i32, ratio: f64) -> i32 {
    (f64::from(value) * ratio) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_truncates() {
        assert_eq!(scaled(190, 0.15), 28);
        assert_eq!(scaled(26, 1.6), 41);
        assert_eq!(scaled(190, 0.18), 34);
        assert_eq!(scaled(55, 0.4), 22);
    }

    #[test]
    fn test_anchor_sits_below_midpoint() {
        let size = CanvasSize {
            width: 900,
            height: 900,
        };
        assert_eq!(size.anchor(0.65), Point::new(450, 585));
    }

    #[test]
    fn test_mirrored_about_center() {
        let p = Point::new(590, 557);
        assert_eq!(p.mirrored(900), Point::new(310, 557));
        assert_eq!(p.mirrored(900).mirrored(900), p);
    }
}

//! Landmark layout for the mirrored golf stances and the ball glyph
//!
//! Both figures come from one formula set; the mirror sign flips every
//! horizontal offset so the right figure is the left one reflected about
//! the canvas centre line.

use super::geometry::{CanvasSize, Point, scaled};
use crate::config::StanceConfig;

/// Horizontal direction a figure is laid out in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MirrorSign {
    Left,
    Right,
}

impl MirrorSign {
    /// Both directions, in drawing order
    pub const ALL: [MirrorSign; 2] = [MirrorSign::Left, MirrorSign::Right];

    /// Multiplier applied to horizontal offsets
    pub fn factor(self) -> i32 {
        match self {
            MirrorSign::Left => -1,
            MirrorSign::Right => 1,
        }
    }
}

/// Joints of one stick figure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Figure {
    pub sign: MirrorSign,
    pub hip: Point,
    pub shoulder: Point,
    pub head: Point,
    pub hand: Point,
    pub elbow: Point,
    pub foot_front: Point,
    pub foot_back: Point,
    /// Club head position, near the ball
    pub club_end: Point,
    pub head_r: i32,
}

impl Figure {
    /// Lay out one figure around the shared anchor
    pub fn compute(config: &StanceConfig, center: Point, sign: MirrorSign) -> Self {
        let s = sign.factor();
        let bw = config.base_width;
        let body_h = config.body_h;
        let leg_h = config.leg_h;

        let hip = center.offset(s * bw / 2, -scaled(body_h, 0.15));
        let shoulder = hip.offset(s * scaled(bw, 0.08), -scaled(body_h, 0.6));
        let head = shoulder.offset(s * scaled(bw, 0.05), -scaled(config.head_r, 1.6));
        let hand = center.offset(s * scaled(bw, 0.3), scaled(body_h, 0.12));
        let foot_front = center.offset(s * scaled(bw, 0.55), leg_h);
        let foot_back = center.offset(s * scaled(bw, 0.35), scaled(leg_h, 0.9));
        let elbow = shoulder.offset(s * scaled(bw, 0.06), scaled(body_h, 0.18));
        let club_end = center.offset(s * scaled(bw, 0.08), scaled(config.ball_r, 0.2));

        Self {
            sign,
            hip,
            shoulder,
            head,
            hand,
            elbow,
            foot_front,
            foot_back,
            club_end,
            head_r: config.head_r,
        }
    }

    /// Connected polylines making up the body, legs, arm and club
    pub fn strokes(&self) -> [Vec<Point>; 6] {
        [
            vec![self.hip, self.foot_front],
            vec![self.hip, self.foot_back],
            vec![self.hip, self.shoulder],
            vec![self.shoulder, self.head],
            vec![self.shoulder, self.elbow, self.hand],
            vec![self.hand, self.club_end],
        ]
    }

    /// Every landmark with its name
    pub fn landmarks(&self) -> [(&'static str, Point); 8] {
        [
            ("hip", self.hip),
            ("shoulder", self.shoulder),
            ("head", self.head),
            ("hand", self.hand),
            ("elbow", self.elbow),
            ("foot_front", self.foot_front),
            ("foot_back", self.foot_back),
            ("club_end", self.club_end),
        ]
    }
}

/// Vertical arrow through the ball, pointing up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Arrow {
    pub top: Point,
    pub bottom: Point,
    /// Chevron endpoints, hanging diagonally below the tip
    pub left: Point,
    pub right: Point,
}

impl Arrow {
    /// Build an arrow of `len` centred on `anchor`
    pub fn centred_on(anchor: Point, len: i32, chevron: (i32, i32)) -> Self {
        let top = anchor.offset(0, -len / 2);
        let bottom = anchor.offset(0, len / 2);
        let (dx, dy) = chevron;
        Self {
            top,
            bottom,
            left: top.offset(-dx, dy),
            right: top.offset(dx, dy),
        }
    }

    /// Shaft and chevron segments, in drawing order
    pub fn segments(&self) -> [[Point; 2]; 3] {
        [
            [self.bottom, self.top],
            [self.top, self.left],
            [self.top, self.right],
        ]
    }
}

/// Ball circle with its arrow
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BallGlyph {
    pub center: Point,
    pub radius: i32,
    pub arrow: Arrow,
}

impl BallGlyph {
    pub fn compute(config: &StanceConfig, center: Point) -> Self {
        let ball_center = center.offset(0, scaled(config.ball_r, 0.4));
        Self {
            center: ball_center,
            radius: config.ball_r,
            arrow: Arrow::centred_on(ball_center, config.arrow_len, config.chevron),
        }
    }
}

/// Complete overlay geometry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StanceLayout {
    pub size: CanvasSize,
    pub center: Point,
    pub figures: [Figure; 2],
    pub ball: BallGlyph,
}

impl StanceLayout {
    /// Compute every landmark for the given configuration
    pub fn compute(config: &StanceConfig) -> Self {
        let size = CanvasSize {
            width: config.width,
            height: config.height,
        };
        let center = size.anchor(config.anchor_ratio);
        let figures = MirrorSign::ALL.map(|sign| Figure::compute(config, center, sign));
        let ball = BallGlyph::compute(config, center);

        let [left, right] = &figures;
        for ((name, l), (_, r)) in left.landmarks().into_iter().zip(right.landmarks()) {
            debug_assert_eq!(l.mirrored(2 * center.x), r, "{name} breaks the mirror");
            log::trace!("{name}: left {:?}, right {:?}", l, r);
        }
        log::debug!(
            "Stance layout: center {:?}, ball {:?}, {} figures",
            center,
            ball.center,
            figures.len()
        );

        Self {
            size,
            center,
            figures,
            ball,
        }
    }
}

//! Image rendering for the stance overlay using tiny-skia
//!
//! Strokes are drawn opaque onto a transparent pixmap and the stroke alpha is
//! applied once when converting to RgbaImage, so overlapping strokes keep a
//! uniform opacity.

use anyhow::Context;
use image::{Rgba, RgbaImage};
use tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::{self, shape};
use crate::config::StrokeStyle;
use crate::domain::{Arrow, BallGlyph, Figure, Point, StanceLayout};

/// Integer landmarks address pixel centres
fn pixel_centre() -> Transform {
    Transform::from_translate(0.5, 0.5)
}

/// Build a connected polyline through `points`
fn build_polyline_path(points: &[Point]) -> Option<tiny_skia::Path> {
    let (first, rest) = points.split_first()?;

    let mut pb = PathBuilder::new();
    let (x, y) = first.to_f32();
    pb.move_to(x, y);
    for point in rest {
        let (x, y) = point.to_f32();
        pb.line_to(x, y);
    }
    pb.finish()
}

/// Build an arrow path as stroked lines (shaft + two chevron lines)
fn build_arrow_path(arrow: &Arrow) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for [from, to] in arrow.segments() {
        let (x1, y1) = from.to_f32();
        let (x2, y2) = to.to_f32();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
    }
    pb.finish()
}

/// Build an ellipse path using cubic bezier curves
fn build_ellipse_path(cx: f32, cy: f32, rx: f32, ry: f32) -> Option<tiny_skia::Path> {
    let kx = rx * shape::BEZIER_K;
    let ky = ry * shape::BEZIER_K;

    let mut pb = PathBuilder::new();

    // Start at top
    pb.move_to(cx, cy - ry);
    pb.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
    pb.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
    pb.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
    pb.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);

    pb.close();
    pb.finish()
}

/// Opaque pen in the stroke color; alpha is applied on export
fn pen(style: &StrokeStyle) -> (Paint<'static>, Stroke) {
    let [r, g, b, _] = style.color;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: style.width,
        line_cap: LineCap::Butt,
        line_join: style.join,
        ..Default::default()
    };
    (paint, stroke)
}

/// Stroke an outlined circle whose ink stays inside its bounding box
fn draw_circle_outline(pixmap: &mut Pixmap, center: Point, radius: i32, style: &StrokeStyle) {
    let (paint, stroke) = pen(style);
    let (cx, cy) = center.to_f32();
    let r = geometry::inset_radius(radius as f32, style.width);
    if let Some(path) = build_ellipse_path(cx, cy, r, r) {
        pixmap.stroke_path(&path, &paint, &stroke, pixel_centre(), None);
    }
}

/// Draw one stick figure: legs, torso, neck, arm, club and head
pub fn draw_figure(pixmap: &mut Pixmap, figure: &Figure, style: &StrokeStyle) {
    log::trace!("Drawing {:?} figure at hip {:?}", figure.sign, figure.hip);
    let (paint, stroke) = pen(style);
    for polyline in figure.strokes() {
        let Some(path) = build_polyline_path(&polyline) else {
            continue;
        };
        pixmap.stroke_path(&path, &paint, &stroke, pixel_centre(), None);
    }
    draw_circle_outline(pixmap, figure.head, figure.head_r, style);
}

/// Draw the ball outline and its arrow
pub fn draw_ball_glyph(pixmap: &mut Pixmap, ball: &BallGlyph, style: &StrokeStyle) {
    draw_circle_outline(pixmap, ball.center, ball.radius, style);

    let (paint, stroke) = pen(style);
    if let Some(path) = build_arrow_path(&ball.arrow) {
        pixmap.stroke_path(&path, &paint, &stroke, pixel_centre(), None);
    }
}

/// Convert a premultiplied pixmap to straight RGBA, scaling coverage by `alpha`
fn to_rgba_image(pixmap: &Pixmap, alpha: u8) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        let a = (u16::from(c.alpha()) * u16::from(alpha) + 127) / 255;
        *dst = Rgba([c.red(), c.green(), c.blue(), a as u8]);
    }
    img
}

/// Render the full overlay onto a fresh transparent canvas
pub fn render_overlay(layout: &StanceLayout, style: &StrokeStyle) -> anyhow::Result<RgbaImage> {
    let (w, h) = (layout.size.width, layout.size.height);
    let mut pixmap =
        Pixmap::new(w, h).with_context(|| format!("Invalid canvas size {}x{}", w, h))?;

    for figure in &layout.figures {
        draw_figure(&mut pixmap, figure, style);
    }
    draw_ball_glyph(&mut pixmap, &layout.ball, style);

    log::debug!("Rendered stance overlay: {}x{} pixels", w, h);
    Ok(to_rgba_image(&pixmap, style.color[3]))
}

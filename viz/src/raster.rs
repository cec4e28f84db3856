//! Headless renderer for the three views. Consumes a [`FrameOutput`]
//! and the trail; produces 400x400 RGBA surfaces.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use retrograde::prelude::*;

pub const VIEW_SIZE: u32 = 400;

pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const ORBIT_STROKE: Rgba<u8> = Rgba([51, 51, 51, 255]);
pub const SUN: Rgba<u8> = Rgba([255, 215, 0, 255]);
pub const INNER_BODY: Rgba<u8> = Rgba([160, 82, 45, 255]);
pub const OUTER_BODY: Rgba<u8> = Rgba([65, 105, 225, 255]);

const SUN_RADIUS: i32 = 20;
const INNER_RADIUS: i32 = 8;
const OUTER_RADIUS: i32 = 12;

/// Core coordinates are origin-centered; the canvas is centered on its
/// own midpoint.
fn to_px(p: Vec2) -> (i32, i32) {
    let c = p + Vec2::splat(VIEW_SIZE as f32 / 2.0);
    (c.x.round() as i32, c.y.round() as i32)
}

fn to_px_f(p: Vec2) -> (f32, f32) {
    let c = p + Vec2::splat(VIEW_SIZE as f32 / 2.0);
    (c.x, c.y)
}

fn blank() -> RgbaImage {
    RgbaImage::from_pixel(VIEW_SIZE, VIEW_SIZE, BACKGROUND)
}

/// Both orbits, the central mass, and both bodies.
pub fn draw_global_view(scenario: &Scenario, out: &FrameOutput) -> RgbaImage {
    let mut img = blank();
    let center = to_px(Vec2::ZERO);
    draw_hollow_circle_mut(&mut img, center, scenario.inner.radius() as i32, ORBIT_STROKE);
    draw_hollow_circle_mut(&mut img, center, scenario.outer.radius() as i32, ORBIT_STROKE);
    draw_filled_circle_mut(&mut img, center, SUN_RADIUS, SUN);
    draw_filled_circle_mut(&mut img, to_px(out.inner), INNER_RADIUS, INNER_BODY);
    draw_filled_circle_mut(&mut img, to_px(out.outer), OUTER_RADIUS, OUTER_BODY);
    img
}

/// The observation ring with the inner body pinned to it, plus a
/// reference line from the observer.
pub fn draw_observer_view(scenario: &Scenario, out: &FrameOutput) -> RgbaImage {
    let mut img = blank();
    let center = to_px(Vec2::ZERO);
    draw_hollow_circle_mut(&mut img, center, scenario.view_radius as i32, ORBIT_STROKE);
    draw_line_segment_mut(
        &mut img,
        to_px_f(Vec2::ZERO),
        to_px_f(out.observed),
        ORBIT_STROKE,
    );
    draw_filled_circle_mut(&mut img, to_px(out.observed), INNER_RADIUS, INNER_BODY);
    img
}

/// The accumulated apparent-motion polyline, observer at the center,
/// the inner body at the newest point.
pub fn draw_trail_view(trail: &Trail) -> RgbaImage {
    let mut img = blank();
    let pts: Vec<Vec2> = trail.points().collect();
    for pair in pts.windows(2) {
        draw_line_segment_mut(&mut img, to_px_f(pair[0]), to_px_f(pair[1]), INNER_BODY);
    }
    draw_filled_circle_mut(&mut img, to_px(Vec2::ZERO), OUTER_RADIUS, OUTER_BODY);
    if let Some(tip) = trail.latest() {
        draw_filled_circle_mut(&mut img, to_px(tip), INNER_RADIUS, INNER_BODY);
    }
    img
}

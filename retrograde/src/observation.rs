//! Two distinct conventions exist for "where the observer sees the target":
//! the observer view pins the target to a fixed ring radius, while the
//! trail view keeps the true separation distance. They are intentionally
//! separate functions.

use crate::math::Vec2;

/// Bearing from `observer` to `target`, pinned to a constant viewing
/// radius. Observer-view convention.
pub fn sky_position(observer: Vec2, target: Vec2, view_radius: f32) -> Vec2 {
    Vec2::from_angle((target - observer).to_angle()) * view_radius
}

/// Offset of `target` as seen from `observer`, keeping the true
/// separation distance. Trail-view convention.
pub fn relative_position(observer: Vec2, target: Vec2) -> Vec2 {
    target - observer
}

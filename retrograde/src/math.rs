pub use glam::f32::Vec2;

pub const PI: f32 = std::f32::consts::PI;

/// maps t into [0, period), never negative
pub fn wrap_time(t: f32, period: f32) -> f32 {
    t.rem_euclid(period)
}

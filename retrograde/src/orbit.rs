use crate::error::DomainError;
use crate::math::{Vec2, PI};
use serde::{Deserialize, Serialize};

/// A body on a simplified circular orbit around the origin.
///
/// Time is unitless; one unit of time per animation tick at 1x speed.
/// The phase offset sets where on the circle the body sits at t = 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularOrbit {
    radius: f32,
    period: f32,
    phase: f32,
}

impl CircularOrbit {
    pub fn new(radius: f32, period: f32, phase: f32) -> Result<Self, DomainError> {
        let orbit = CircularOrbit {
            radius,
            period,
            phase,
        };
        orbit.validate()?;
        Ok(orbit)
    }

    /// Inner body defaults from the classic retrograde demo.
    pub fn mercury() -> Self {
        CircularOrbit {
            radius: 80.0,
            period: 88.0,
            phase: -PI / 6.0,
        }
    }

    pub fn earth() -> Self {
        CircularOrbit {
            radius: 150.0,
            period: 365.0,
            phase: 0.0,
        }
    }

    /// Deserialized orbits bypass `new`; callers loading from file
    /// re-check here.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.period <= 0.0 {
            return Err(DomainError::NonPositivePeriod(self.period));
        }
        if self.radius < 0.0 {
            return Err(DomainError::NegativeRadius(self.radius));
        }
        Ok(())
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn angle_at(&self, time: f32) -> f32 {
        (time / self.period) * 2.0 * PI + self.phase
    }

    pub fn position_at(&self, time: f32) -> Vec2 {
        Vec2::from_angle(self.angle_at(time)) * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            CircularOrbit::new(80.0, 0.0, 0.0),
            Err(DomainError::NonPositivePeriod(0.0))
        );
        assert_eq!(
            CircularOrbit::new(80.0, -1.0, 0.0),
            Err(DomainError::NonPositivePeriod(-1.0))
        );
        assert_eq!(
            CircularOrbit::new(-80.0, 88.0, 0.0),
            Err(DomainError::NegativeRadius(-80.0))
        );
        assert!(CircularOrbit::new(0.0, 88.0, 0.0).is_ok());
    }

    #[test]
    fn periodicity() {
        let orbit = CircularOrbit::earth();
        let a = orbit.position_at(0.0);
        let b = orbit.position_at(orbit.period());
        assert_relative_eq!(a.x, b.x, epsilon = 1e-3);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-3);
    }

    #[test]
    fn quarter_period_is_a_quarter_turn() {
        let orbit = CircularOrbit::earth();
        let p = orbit.position_at(365.0 / 4.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(p.y, 150.0, epsilon = 1e-3);
    }

    #[test]
    fn phase_offsets_starting_position() {
        let orbit = CircularOrbit::mercury();
        let p = orbit.position_at(0.0);
        assert_relative_eq!(p.x, 80.0 * (PI / 6.0).cos(), epsilon = 1e-4);
        assert_relative_eq!(p.y, -80.0 * (PI / 6.0).sin(), epsilon = 1e-4);
    }
}

use crate::error::DomainError;
use crate::math::wrap_time;
use enum_iterator::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Paused,
    Playing,
}

/// Discrete speed choices offered by the UI. Arbitrary positive
/// multipliers remain legal through [`Playback::set_speed`].
#[derive(Debug, Clone, Copy, Sequence, PartialEq, Eq)]
pub enum Speed {
    Half,
    Normal,
    Double,
    Fast,
}

impl Speed {
    pub fn as_f32(&self) -> f32 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::Double => 2.0,
            Speed::Fast => 5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Double => "2x",
            Speed::Fast => "5x",
        }
    }

    pub fn slower(&mut self) {
        *self = enum_iterator::previous(self).unwrap_or(*self);
    }

    pub fn faster(&mut self) {
        *self = enum_iterator::next(self).unwrap_or(*self);
    }

    pub fn all() -> impl Iterator<Item = Self> {
        enum_iterator::all::<Self>()
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::Normal
    }
}

/// Animation clock. Owns current time, the play/pause flag, and the
/// speed multiplier; time always stays in [0, period).
#[derive(Debug, Clone)]
pub struct Playback {
    time: f32,
    period: f32,
    speed: f32,
    state: PlayState,
}

impl Playback {
    pub fn new(period: f32) -> Result<Self, DomainError> {
        if period <= 0.0 {
            return Err(DomainError::NonPositivePeriod(period));
        }
        Ok(Playback {
            time: 0.0,
            period,
            speed: Speed::Normal.as_f32(),
            state: PlayState::Paused,
        })
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Flips play/pause and reports the state entered.
    pub fn toggle(&mut self) -> PlayState {
        self.state = match self.state {
            PlayState::Paused => PlayState::Playing,
            PlayState::Playing => PlayState::Paused,
        };
        self.state
    }

    pub fn play(&mut self) {
        self.state = PlayState::Playing;
    }

    pub fn pause(&mut self) {
        self.state = PlayState::Paused;
    }

    /// Advances one frame of animation time. No-op while paused.
    pub fn tick(&mut self) {
        if self.is_playing() {
            self.time = wrap_time(self.time + self.speed, self.period);
        }
    }

    /// Jumps to a point in the cycle without changing play state.
    /// Returns the wrapped time actually landed on.
    pub fn seek(&mut self, t: f32) -> f32 {
        self.time = wrap_time(t, self.period);
        self.time
    }

    /// Takes effect on the next tick.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), DomainError> {
        if !(speed > 0.0) {
            return Err(DomainError::NonPositiveSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn select_speed(&mut self, speed: Speed) {
        self.speed = speed.as_f32();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn starts_paused_at_zero() {
        let pb = Playback::new(365.0).unwrap();
        assert_eq!(pb.state(), PlayState::Paused);
        assert_eq!(pb.time(), 0.0);
        assert_eq!(pb.speed(), 1.0);
    }

    #[test]
    fn tick_wraps_at_period() {
        let mut pb = Playback::new(88.0).unwrap();
        pb.play();
        pb.seek(87.0);
        pb.tick();
        assert_float_absolute_eq!(pb.time(), 0.0);
        pb.tick();
        assert_float_absolute_eq!(pb.time(), 1.0);
    }

    #[test]
    fn tick_is_a_noop_while_paused() {
        let mut pb = Playback::new(88.0).unwrap();
        pb.seek(10.0);
        pb.tick();
        assert_eq!(pb.time(), 10.0);
    }

    #[test]
    fn seek_wraps_and_preserves_state() {
        let mut pb = Playback::new(365.0).unwrap();
        assert_float_absolute_eq!(pb.seek(400.0), 35.0);
        assert_eq!(pb.state(), PlayState::Paused);
        pb.play();
        assert_float_absolute_eq!(pb.seek(-1.0), 364.0);
        assert_eq!(pb.state(), PlayState::Playing);
    }

    #[test]
    fn rejects_bad_speed() {
        let mut pb = Playback::new(365.0).unwrap();
        assert_eq!(pb.set_speed(0.0), Err(DomainError::NonPositiveSpeed(0.0)));
        assert_eq!(pb.set_speed(-2.0), Err(DomainError::NonPositiveSpeed(-2.0)));
        assert!(pb.set_speed(f32::NAN).is_err());
        assert_eq!(pb.speed(), 1.0);
        assert!(pb.set_speed(2.5).is_ok());
        assert_eq!(pb.speed(), 2.5);
    }

    #[test]
    fn rejects_bad_period() {
        assert!(Playback::new(0.0).is_err());
        assert!(Playback::new(-365.0).is_err());
    }

    #[test]
    fn speed_choices_step_through_the_ladder() {
        let mut s = Speed::default();
        assert_eq!(s, Speed::Normal);
        s.faster();
        assert_eq!(s.as_f32(), 2.0);
        s.faster();
        s.faster();
        assert_eq!(s, Speed::Fast);
        s.slower();
        s.slower();
        s.slower();
        s.slower();
        assert_eq!(s, Speed::Half);
        assert_eq!(Speed::all().count(), 4);
    }
}

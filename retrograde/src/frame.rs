use crate::error::{DomainError, EncodeError};
use crate::math::Vec2;
use crate::observation::{relative_position, sky_position};
use crate::playback::{PlayState, Playback, Speed};
use crate::recording::{EncodedFile, Encoder, OutputFormat, RecordingSession, StopRule};
use crate::scenario::Scenario;
use crate::trail::Trail;
use std::time::Instant;

/// What the host should do with this frame: positions for the three
/// views, plus capture/finalize requests while a recording is active.
#[derive(Debug, Clone, Copy)]
pub struct FrameOutput {
    pub time: f32,
    /// Inner body, global-view coordinates.
    pub inner: Vec2,
    /// Outer (observer) body, global-view coordinates.
    pub outer: Vec2,
    /// Inner body as seen from the observer, pinned to the view ring.
    pub observed: Vec2,
    /// Composite the views and push the result into the session.
    pub capture: bool,
    /// The stop rule fired; hand the capture to an encoder.
    pub finalize: bool,
}

/// Owns the whole animation state: orbits, clock, trail, and the single
/// recording session. The host loop calls [`Scene::step`] once per frame
/// and renders whatever comes back; all sequencing lives here.
#[derive(Debug)]
pub struct Scene<F> {
    scenario: Scenario,
    playback: Playback,
    trail: Trail,
    session: RecordingSession<F>,
    capture_started: Option<Instant>,
}

impl<F> Scene<F> {
    pub fn new(scenario: Scenario) -> Result<Self, DomainError> {
        scenario.validate()?;
        let playback = Playback::new(scenario.outer.period())?;
        let trail = Trail::new(scenario.trail_capacity);
        Ok(Scene {
            scenario,
            playback,
            trail,
            session: RecordingSession::new(),
            capture_started: None,
        })
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn session(&self) -> &RecordingSession<F> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut RecordingSession<F> {
        &mut self.session
    }

    /// Trails only make sense while actively playing, so entering
    /// Paused discards the one on screen.
    pub fn toggle_play(&mut self) {
        if self.playback.toggle() == PlayState::Paused {
            self.trail.clear();
        }
    }

    pub fn seek(&mut self, t: f32) {
        self.playback.seek(t);
        self.trail.clear();
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<(), DomainError> {
        self.playback.set_speed(speed)
    }

    pub fn select_speed(&mut self, speed: Speed) {
        self.playback.select_speed(speed);
    }

    /// Starts a capture: rewinds to t = 0, forces playback on, clears
    /// the trail. A no-op if a session is already in flight.
    pub fn start_recording(&mut self, format: OutputFormat, stop: StopRule) -> bool {
        if !self.session.start(format, stop) {
            return false;
        }
        self.playback.seek(0.0);
        self.playback.play();
        self.trail.clear();
        self.capture_started = Some(Instant::now());
        true
    }

    /// The wall-clock stop rule the original demo used, computed from
    /// the current speed and the scenario frame rate.
    pub fn legacy_stop_rule(&self) -> StopRule {
        StopRule::wall_clock(
            self.playback.period(),
            self.playback.speed(),
            self.scenario.frame_rate,
        )
    }

    /// One frame of the cooperative loop, in strict order: tick, derive
    /// positions, grow the trail, then recording bookkeeping.
    pub fn step(&mut self) -> FrameOutput {
        let was_playing = self.playback.is_playing();
        let speed = self.playback.speed();
        self.playback.tick();

        let t = self.playback.time();
        let inner = self.scenario.inner.position_at(t);
        let outer = self.scenario.outer.position_at(t);
        let observed = sky_position(outer, inner, self.scenario.view_radius);

        if was_playing {
            self.trail.push(relative_position(outer, inner));
        }

        // the frame that meets the deadline is still part of the capture
        let capture = self.session.is_recording();
        let mut finalize = false;
        if self.session.is_recording() {
            let sim_step = if was_playing { speed } else { 0.0 };
            let wall = self
                .capture_started
                .map(|t0| t0.elapsed())
                .unwrap_or_default();
            if self.session.advance(sim_step, wall, self.playback.period()) {
                self.playback.pause();
                finalize = true;
            }
        }

        FrameOutput {
            time: t,
            inner,
            outer,
            observed,
            capture,
            finalize,
        }
    }

    /// Encodes the finished capture and returns the session to Idle.
    /// An encoder failure aborts the session; live playback is
    /// untouched either way.
    pub fn finish(&mut self, encoder: &dyn Encoder<F>) -> Result<EncodedFile, EncodeError> {
        let result = self.session.finalize(encoder);
        self.session.reset();
        self.capture_started = None;
        result
    }

    /// Cancels an in-flight capture without producing a file.
    pub fn cancel_recording(&mut self) {
        self.session.abort();
        self.session.reset();
        self.capture_started = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::CircularOrbit;
    use crate::recording::SessionState;

    fn scene() -> Scene<u32> {
        Scene::new(Scenario::default()).unwrap()
    }

    #[test]
    fn pausing_discards_the_trail() {
        let mut scene = scene();
        scene.toggle_play();
        for _ in 0..10 {
            scene.step();
        }
        assert_eq!(scene.trail().len(), 10);
        scene.toggle_play();
        assert!(scene.trail().is_empty());
    }

    #[test]
    fn seeking_discards_the_trail() {
        let mut scene = scene();
        scene.toggle_play();
        for _ in 0..10 {
            scene.step();
        }
        scene.seek(100.0);
        assert!(scene.trail().is_empty());
        assert_eq!(scene.playback().time(), 100.0);
        assert!(scene.playback().is_playing());
    }

    #[test]
    fn trail_only_grows_while_playing() {
        let mut scene = scene();
        scene.step();
        scene.step();
        assert!(scene.trail().is_empty());
        scene.toggle_play();
        scene.step();
        assert_eq!(scene.trail().len(), 1);
    }

    #[test]
    fn step_reports_positions_for_all_views() {
        let mut scene = scene();
        let out = scene.step();
        assert_eq!(out.time, 0.0);
        assert_eq!(out.outer, CircularOrbit::earth().position_at(0.0));
        assert_eq!(out.inner, CircularOrbit::mercury().position_at(0.0));
        assert!((out.observed.length() - 150.0).abs() < 1e-3);
        assert!(!out.capture);
        assert!(!out.finalize);
    }

    #[test]
    fn recording_rewinds_and_forces_play() {
        let mut scene = scene();
        scene.seek(123.0);
        assert!(scene.start_recording(OutputFormat::Gif, StopRule::SimulatedPeriod));
        assert_eq!(scene.playback().time(), 0.0);
        assert!(scene.playback().is_playing());
        assert!(scene.trail().is_empty());
        assert!(scene.session().is_recording());
    }

    #[test]
    fn second_recording_start_is_a_noop() {
        let mut scene = scene();
        assert!(scene.start_recording(OutputFormat::Gif, StopRule::SimulatedPeriod));
        scene.step();
        scene.session_mut().push_frame(0);
        assert!(!scene.start_recording(OutputFormat::Sheet, StopRule::SimulatedPeriod));
        assert_eq!(scene.session().frame_count(), 1);
        assert_eq!(scene.session().format(), OutputFormat::Gif);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut scene = scene();
        scene.start_recording(OutputFormat::Gif, StopRule::SimulatedPeriod);
        scene.step();
        scene.cancel_recording();
        assert_eq!(scene.session().state(), SessionState::Idle);
        assert!(scene.start_recording(OutputFormat::Gif, StopRule::SimulatedPeriod));
    }
}

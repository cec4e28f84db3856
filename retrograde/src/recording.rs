use crate::error::EncodeError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Streamed straight into the output file, no conversion step.
    Gif,
    /// Re-encoded frame by frame into a tiled contact sheet.
    Sheet,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Gif => "gif",
            OutputFormat::Sheet => "png",
        }
    }

    pub fn needs_conversion(&self) -> bool {
        match self {
            OutputFormat::Gif => false,
            OutputFormat::Sheet => true,
        }
    }
}

/// When a capture ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopRule {
    /// Finalize once accumulated simulated time reaches one full period
    /// of the outer body. Frame-rate independent.
    SimulatedPeriod,
    /// Finalize after a fixed wall-clock budget. A slow host frame rate
    /// captures less than a full cycle under this rule; kept for
    /// compatibility with the original timer-driven behavior.
    WallClock(Duration),
}

impl StopRule {
    /// The original deadline: one period of playback at the given speed,
    /// assuming the host hits the target frame rate.
    pub fn wall_clock(period: f32, speed: f32, frame_rate: u32) -> StopRule {
        let millis = (period / speed) * (1000.0 / frame_rate as f32);
        StopRule::WallClock(Duration::from_secs_f32(millis / 1000.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Recording,
    Finalizing,
    Done,
    Aborted,
}

/// Encoder collaborator: turns captured frames into a downloadable file.
pub trait Encoder<F> {
    fn encode(&self, frames: &[F], format: OutputFormat) -> Result<EncodedFile, EncodeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFile {
    pub data: Vec<u8>,
    pub extension: &'static str,
}

impl EncodedFile {
    pub fn filename(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension)
    }
}

/// Fixed-duration capture of composited frames.
///
/// Idle -> Recording -> Finalizing -> (Done | Aborted) -> Idle. At most
/// one capture is in flight: `start` while not Idle is a no-op. Frames
/// are opaque to the session; the host composites them, the encoder
/// consumes them.
#[derive(Debug)]
pub struct RecordingSession<F> {
    state: SessionState,
    format: OutputFormat,
    stop: StopRule,
    sim_elapsed: f32,
    frames: Vec<F>,
}

impl<F> RecordingSession<F> {
    pub fn new() -> Self {
        RecordingSession {
            state: SessionState::Idle,
            format: OutputFormat::Gif,
            stop: StopRule::SimulatedPeriod,
            sim_elapsed: 0.0,
            frames: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == SessionState::Recording
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Begins a capture. Returns false (and changes nothing) unless Idle.
    pub fn start(&mut self, format: OutputFormat, stop: StopRule) -> bool {
        if self.state != SessionState::Idle {
            return false;
        }
        self.format = format;
        self.stop = stop;
        self.sim_elapsed = 0.0;
        self.frames.clear();
        self.state = SessionState::Recording;
        true
    }

    /// Appends one composited frame. Accepted while Recording and while
    /// Finalizing (the frame that met the deadline belongs to the
    /// capture); ignored otherwise.
    pub fn push_frame(&mut self, frame: F) {
        if matches!(self.state, SessionState::Recording | SessionState::Finalizing) {
            self.frames.push(frame);
        }
    }

    /// Advances capture bookkeeping by one frame: `sim_step` is the
    /// simulated time that elapsed this frame (zero if paused),
    /// `wall_elapsed` the real time since the capture began. Returns
    /// true when the stop rule fires; the session is then Finalizing.
    pub fn advance(&mut self, sim_step: f32, wall_elapsed: Duration, period: f32) -> bool {
        if self.state != SessionState::Recording {
            return false;
        }
        self.sim_elapsed += sim_step;
        let done = match self.stop {
            StopRule::SimulatedPeriod => self.sim_elapsed >= period,
            StopRule::WallClock(budget) => wall_elapsed >= budget,
        };
        if done {
            self.state = SessionState::Finalizing;
        }
        done
    }

    /// Hands the accumulated frames to the encoder. Success lands in
    /// Done, failure in Aborted; either way the capture is consumed.
    pub fn finalize(&mut self, encoder: &dyn Encoder<F>) -> Result<EncodedFile, EncodeError> {
        if self.state != SessionState::Finalizing {
            return Err(EncodeError::NoCapture);
        }
        let result = encoder.encode(&self.frames, self.format);
        self.state = match result {
            Ok(_) => SessionState::Done,
            Err(_) => SessionState::Aborted,
        };
        self.frames.clear();
        result
    }

    /// Cancels an in-flight capture. No file is produced.
    pub fn abort(&mut self) {
        match self.state {
            SessionState::Recording | SessionState::Finalizing => {
                self.state = SessionState::Aborted;
                self.frames.clear();
            }
            _ => {}
        }
    }

    /// Returns a terminal session to Idle, ready for the next `start`.
    pub fn reset(&mut self) {
        if matches!(self.state, SessionState::Done | SessionState::Aborted) {
            self.state = SessionState::Idle;
        }
    }
}

impl<F> Default for RecordingSession<F> {
    fn default() -> Self {
        RecordingSession::new()
    }
}

pub use crate::error::{DomainError, EncodeError};
pub use crate::frame::{FrameOutput, Scene};
pub use crate::math::{wrap_time, Vec2, PI};
pub use crate::observation::{relative_position, sky_position};
pub use crate::orbit::CircularOrbit;
pub use crate::playback::{PlayState, Playback, Speed};
pub use crate::recording::{
    EncodedFile, Encoder, OutputFormat, RecordingSession, SessionState, StopRule,
};
pub use crate::scenario::{load_scenario, Scenario};
pub use crate::trail::Trail;
